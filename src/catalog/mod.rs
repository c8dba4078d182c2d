//! Destination, interest and trail catalog
//!
//! The catalog is fetched once per session from a [`DataSource`] and then
//! held immutably. Loading is a single result: either every collection is
//! delivered or the whole load fails and nothing is filtered.

pub mod error;
pub mod source;
pub mod types;

pub use error::CatalogError;
pub use source::{CatalogFormat, DataSource, FileSource, MemorySource, open_source};
pub use types::{CatalogDocument, Destination, HiddenTrail, Interest};

use std::collections::HashSet;
use tracing::{debug, warn};

/// Loaded, validated catalog collections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    pub interests: Vec<Interest>,
    pub trails: Vec<HiddenTrail>,
}

impl Catalog {
    /// Fetch every collection from `source` exactly once
    ///
    /// Destinations referencing an interest outside the vocabulary are kept
    /// and logged.
    ///
    /// # Errors
    /// Returns the source's `CatalogError` on fetch failure, or
    /// `CatalogError::DuplicateId` if two destinations share an id.
    pub fn load(source: &dyn DataSource) -> Result<Self, CatalogError> {
        let destinations = source.destinations()?;
        let interests = source.interests()?;
        let trails = source.trails()?;

        let catalog = Self {
            destinations,
            interests,
            trails,
        };
        catalog.validate()?;

        debug!(
            source = %source.name(),
            destinations = catalog.destinations.len(),
            interests = catalog.interests.len(),
            trails = catalog.trails.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for dest in &self.destinations {
            if !seen.insert(dest.id.as_str()) {
                return Err(CatalogError::DuplicateId(dest.id.clone()));
            }
        }

        let known: HashSet<&str> = self.interests.iter().map(|i| i.id.as_str()).collect();
        for dest in &self.destinations {
            for tag in dest.tags.iter().filter(|t| !known.contains(t.as_str())) {
                warn!(
                    destination = %dest.id,
                    interest = %tag,
                    "destination references unknown interest"
                );
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    #[must_use]
    pub fn interest(&self, id: &str) -> Option<&Interest> {
        self.interests.iter().find(|i| i.id == id)
    }

    /// Display label for an interest id, falling back to the id itself
    #[must_use]
    pub fn interest_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.interest(id).map_or(id, |i| i.label.as_str())
    }

    #[must_use]
    pub fn trail(&self, id: u32) -> Option<&HiddenTrail> {
        self.trails.iter().find(|t| t.id == id)
    }
}
