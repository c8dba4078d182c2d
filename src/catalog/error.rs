//! Catalog-specific error types
//!
//! Errors that can occur while fetching or validating the catalog. The filter
//! core itself never fails; these only surface at the data-source boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file does not exist
    #[error("Catalog file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File extension is not a known catalog format
    #[error("Unsupported catalog format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed catalog document
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// Two destinations share an id
    #[error("Duplicate destination id '{0}'")]
    DuplicateId(String),

    /// The data source could not deliver its data
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
