use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Error type covering the different failure cases that can occur when the
/// importer loads, parses, or emits a catalog.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of the catalog fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the CSV header has no column matching a required field.
    /// This is the only fatal parse condition; every other data defect
    /// degrades to a documented fallback value.
    #[error("required column '{0}' not found in CSV header")]
    MissingColumn(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
