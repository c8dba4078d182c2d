//! Roamr - destination discovery with client-side tag filtering
//!
//! This library loads a catalog of destinations, interests and hidden trails
//! and filters it the way the discover view does: a case-insensitive text
//! query across several fields, combined with a multi-select interest filter.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod output;
pub mod session;
pub mod trails;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RoamrError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML output could not be produced
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<toml::ser::Error> for RoamrError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub use catalog::{Catalog, Destination, HiddenTrail, Interest};
pub use filter::{FilterCriteria, apply, clear, toggle_tag};
pub use session::{DiscoverSession, FilterEvent};
