use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::catalog::build_catalog;
use crate::error::{ImportError, Result};
use crate::io::csv_read;
use crate::io::fetch;
use crate::model::Product;

/// Parses an in-memory CSV export into a product catalog.
///
/// Pure and reentrant: no shared state, so independent inputs may be parsed
/// concurrently.
pub fn from_str(text: &str) -> Result<Vec<Product>> {
    let rows = csv_read::tokenize(text);
    debug!(row_count = rows.len(), "tokenized CSV input");
    let products = build_catalog(&rows)?;
    info!(product_count = products.len(), "catalog built");
    Ok(products)
}

/// Imports a product catalog from a CSV file on disk.
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn from_path(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(ImportError::MissingInput(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    from_str(&text)
}

/// Imports a product catalog from a remote CSV export.
///
/// A failed fetch is not an error: it is logged and yields an empty catalog,
/// so callers can render "no data" instead of aborting. Schema failures on
/// successfully fetched text still propagate.
#[instrument(level = "info", skip_all, fields(url = %url))]
pub fn from_url(url: &str) -> Result<Vec<Product>> {
    match fetch::fetch_text(url) {
        Some(text) => from_str(&text),
        None => {
            warn!(%url, "no catalog data available");
            Ok(Vec::new())
        }
    }
}
