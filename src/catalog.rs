use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{ImportError, Result};
use crate::model::{
    DESCRIPTION_PLACEHOLDER, FEATURES_PLACEHOLDER, Product, Specs, UNCATEGORIZED, Variant,
};

static BR_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));
static P_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p>").expect("valid regex"));
static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Ordered keyword containment rules mapping the raw type cell to a fixed
/// category vocabulary. First match wins.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("vibrat", "vibes"),
    ("vibe", "vibes"),
    ("dildo", "dildos"),
    ("anal", "anal"),
    ("plug", "anal"),
    ("male", "male"),
    ("bondage", "bondage"),
    ("bdsm", "bondage"),
    ("lingerie", "lingerie"),
    ("lube", "fluids"),
    ("oil", "fluids"),
    ("toy", "vibes"),
];

/// Column positions resolved once from the header row. `None` means no
/// header matched; the field is then treated as missing on every data row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    handle: Option<usize>,
    title: Option<usize>,
    body: Option<usize>,
    kind: Option<usize>,
    tags: Option<usize>,
    price: Option<usize>,
    sku: Option<usize>,
    image: Option<usize>,
    option1_name: Option<usize>,
    option1_value: Option<usize>,
    option2_name: Option<usize>,
    option2_value: Option<usize>,
    option3_name: Option<usize>,
    option3_value: Option<usize>,
    variant_image: Option<usize>,
}

impl Columns {
    /// Resolves logical fields against the lower-cased, trimmed header row.
    /// Each field walks its keyword list in priority order, preferring an
    /// exact header match over a substring match.
    fn resolve(headers: &[String]) -> Result<Self> {
        let columns = Self {
            handle: find_column(headers, &["handle"]),
            title: find_column(headers, &["title"]),
            body: find_column(headers, &["body (html)", "body", "description"]),
            kind: find_column(headers, &["type"]),
            tags: find_column(headers, &["tags"]),
            price: find_column(headers, &["variant price", "price"]),
            sku: find_column(headers, &["variant sku", "sku"]),
            image: find_column(headers, &["image src", "image"]),
            option1_name: find_column(headers, &["option1 name"]),
            option1_value: find_column(headers, &["option1 value"]),
            option2_name: find_column(headers, &["option2 name"]),
            option2_value: find_column(headers, &["option2 value"]),
            option3_name: find_column(headers, &["option3 name"]),
            option3_value: find_column(headers, &["option3 value"]),
            variant_image: find_column(headers, &["variant image"]),
        };

        if columns.handle.is_none() {
            return Err(ImportError::MissingColumn("Handle".to_string()));
        }
        Ok(columns)
    }
}

fn find_column(headers: &[String], keywords: &[&str]) -> Option<usize> {
    for keyword in keywords {
        if let Some(index) = headers.iter().position(|header| header == keyword) {
            return Some(index);
        }
        if let Some(index) = headers.iter().position(|header| header.contains(keyword)) {
            return Some(index);
        }
    }
    None
}

fn cell<'a>(row: &'a [String], index: Option<usize>) -> &'a str {
    index
        .and_then(|index| row.get(index))
        .map(|value| value.trim())
        .unwrap_or("")
}

/// Folds tokenized export rows into normalized product records.
///
/// Row 0 is the header. Each subsequent row either creates a product (first
/// occurrence of its handle) or merges images and variants into the existing
/// record. Products come back in the order their handle first appeared.
///
/// # Errors
///
/// Returns [`ImportError::MissingColumn`] when no header matches the
/// required handle column. Every other data defect degrades to a fallback
/// value rather than failing.
pub fn build_catalog(rows: &[Vec<String>]) -> Result<Vec<Product>> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Err(ImportError::MissingColumn("Handle".to_string()));
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();
    let columns = Columns::resolve(&headers)?;

    let mut products: IndexMap<String, Product> = IndexMap::new();

    for row in data_rows {
        let handle = cell(row, columns.handle);
        if handle.is_empty() {
            continue;
        }

        let product = products
            .entry(handle.to_string())
            .or_insert_with(|| new_product(handle, row, &columns));

        if let Some(url) = gallery_image(cell(row, columns.image)) {
            if !product.images.contains(&url) {
                product.images.push(url);
            }
        }

        if let Some(variant) = build_variant(product, handle, row, &columns) {
            let duplicate = product
                .variants
                .iter()
                .any(|existing| existing.id == variant.id);
            if !duplicate {
                product.variants.push(variant);
            }
        }
    }

    Ok(products.into_values().collect())
}

/// Constructs a product from the first row bearing its handle. Later rows
/// sharing the handle only contribute images and variants; in particular the
/// option-name cells are trusted on this row alone, since the export format
/// repeats them on every row.
fn new_product(handle: &str, row: &[String], columns: &Columns) -> Product {
    let title = cell(row, columns.title);
    let name = if title.is_empty() {
        handle.replace('-', " ").to_uppercase()
    } else {
        title.to_string()
    };

    let sku = cell(row, columns.sku);
    let sku = if sku.is_empty() {
        handle.to_uppercase()
    } else {
        sku.to_string()
    };

    Product {
        id: handle.to_string(),
        sku,
        name,
        price: parse_price(cell(row, columns.price)).unwrap_or(0.0),
        category: classify_category(cell(row, columns.kind)),
        images: Vec::new(),
        description: strip_html(cell(row, columns.body)),
        features: split_tags(cell(row, columns.tags)),
        specs: Specs::default(),
        in_stock: true,
        option1_name: non_blank(cell(row, columns.option1_name)),
        option2_name: non_blank(cell(row, columns.option2_name)),
        option3_name: non_blank(cell(row, columns.option3_name)),
        variants: Vec::new(),
    }
}

/// Builds a variant when at least one option value is present on the row.
/// Price falls back to the parent product price, the image to the row's
/// general image cell, and the sku to a synthesized `{sku}-{opt1}-{opt2}`.
fn build_variant(
    product: &Product,
    handle: &str,
    row: &[String],
    columns: &Columns,
) -> Option<Variant> {
    let option1 = cell(row, columns.option1_value);
    let option2 = cell(row, columns.option2_value);
    let option3 = cell(row, columns.option3_value);
    if option1.is_empty() && option2.is_empty() && option3.is_empty() {
        return None;
    }

    let sku = cell(row, columns.sku);
    let sku = if sku.is_empty() {
        format!("{}-{option1}-{option2}", product.sku)
    } else {
        sku.to_string()
    };

    let image = cell(row, columns.variant_image);
    let image = if image.is_empty() {
        cell(row, columns.image)
    } else {
        image
    };

    Some(Variant {
        id: variant_id(handle, option1, option2, option3),
        sku,
        option1: non_blank(option1),
        option2: non_blank(option2),
        option3: non_blank(option3),
        price: parse_price(cell(row, columns.price)).unwrap_or(product.price),
        image: normalize_url(image),
        in_stock: true,
    })
}

/// Composite variant key: `{handle}-{opt1 or "default"}-{opt2}-{opt3}`
/// lower-cased with whitespace runs collapsed to single hyphens. Blank
/// second and third options stay as empty segments; only the first option
/// substitutes `default`. Downstream keys depend on this exact shape.
fn variant_id(handle: &str, option1: &str, option2: &str, option3: &str) -> String {
    let first = if option1.is_empty() { "default" } else { option1 };
    let raw = format!("{handle}-{first}-{option2}-{option3}").to_lowercase();
    WHITESPACE_RE.replace_all(&raw, "-").into_owned()
}

/// Accepts absolute (`http...`) and protocol-relative (`//...`) URLs for the
/// product gallery, rejecting anything else. Protocol-relative URLs are
/// pinned to `https`.
fn gallery_image(raw: &str) -> Option<String> {
    if let Some(rest) = raw.strip_prefix("//") {
        Some(format!("https://{rest}"))
    } else if raw.starts_with("http") {
        Some(raw.to_string())
    } else {
        None
    }
}

fn normalize_url(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else if let Some(rest) = raw.strip_prefix("//") {
        Some(format!("https://{rest}"))
    } else {
        Some(raw.to_string())
    }
}

/// Parses a price cell, treating unparsable and non-finite values as absent
/// so the caller can apply its documented fallback.
fn parse_price(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|price| price.is_finite())
}

fn classify_category(raw: &str) -> String {
    if raw.is_empty() {
        return UNCATEGORIZED.to_string();
    }
    let lowered = raw.to_lowercase();
    for (keyword, category) in CATEGORY_RULES {
        if lowered.contains(keyword) {
            return (*category).to_string();
        }
    }
    raw.to_uppercase()
}

/// Reduces body HTML to plain text: `<br>` variants become newlines, `</p>`
/// a blank line, every remaining tag is dropped.
fn strip_html(body: &str) -> String {
    let text = BR_TAG_RE.replace_all(body, "\n");
    let text = P_CLOSE_RE.replace_all(&text, "\n\n");
    let text = ANY_TAG_RE.replace_all(&text, "");
    let text = text.trim();
    if text.is_empty() {
        DESCRIPTION_PLACEHOLDER.to_string()
    } else {
        text.to_string()
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    let features: Vec<String> = tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();
    if features.is_empty() {
        vec![FEATURES_PLACEHOLDER.to_string()]
    } else {
        features
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
