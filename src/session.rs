//! Discover session state
//!
//! A [`DiscoverSession`] is one activation of the discover view: it loads the
//! destinations and interests once, owns the current [`FilterCriteria`], and
//! recomputes the visible destinations synchronously after every user event.
//!
//! ```
//! use roamr::catalog::MemorySource;
//! use roamr::session::{DiscoverSession, FilterEvent};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = MemorySource::builtin()?;
//! let mut session = DiscoverSession::open(&source)?;
//!
//! session.handle(FilterEvent::QueryChanged("kyoto".into()));
//! assert_eq!(session.result_summary(), "1 result found");
//!
//! session.handle(FilterEvent::ClearAll);
//! assert!(!session.criteria().is_active());
//! # Ok(())
//! # }
//! ```

use crate::catalog::{Catalog, CatalogError, DataSource, Destination, Interest};
use crate::filter::{self, FilterCriteria};
use tracing::debug;

/// User-originated change to the filter criteria
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Search text changed
    QueryChanged(String),
    /// An interest chip was tapped
    TagToggled(String),
    /// "Clear all filters" was tapped
    ClearAll,
}

/// State of one discover view activation
#[derive(Debug, Clone)]
pub struct DiscoverSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    visible: Vec<Destination>,
}

impl DiscoverSession {
    /// Load the catalog from `source` and start with no active filters
    ///
    /// # Errors
    /// Returns `CatalogError` if the source fails; no session exists then.
    pub fn open(source: &dyn DataSource) -> Result<Self, CatalogError> {
        Ok(Self::from_catalog(Catalog::load(source)?))
    }

    /// Start a session over an already loaded catalog
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let visible = catalog.destinations.clone();
        Self {
            catalog,
            criteria: FilterCriteria::new(),
            visible,
        }
    }

    /// Apply a user event and recompute the visible destinations
    pub fn handle(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::QueryChanged(query) => self.criteria.set_query(query),
            FilterEvent::TagToggled(tag_id) => {
                self.criteria.selected_tags =
                    filter::toggle_tag(&self.criteria.selected_tags, &tag_id);
            }
            FilterEvent::ClearAll => self.criteria = filter::clear(),
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = filter::apply(&self.catalog.destinations, &self.criteria)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            query = %self.criteria.query,
            tags = self.criteria.active_tag_count(),
            visible = self.visible.len(),
            "filters applied"
        );
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Interest vocabulary, in source order
    #[must_use]
    pub fn interests(&self) -> &[Interest] {
        &self.catalog.interests
    }

    /// Destinations passing the current criteria, in source order
    #[must_use]
    pub fn visible(&self) -> &[Destination] {
        &self.visible
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, tag_id: &str) -> bool {
        self.criteria.is_selected(tag_id)
    }

    #[must_use]
    pub fn active_tag_count(&self) -> usize {
        self.criteria.active_tag_count()
    }

    /// "1 result found" / "N results found"
    #[must_use]
    pub fn result_summary(&self) -> String {
        result_summary(self.visible.len())
    }
}

/// Result count line shown above the list
#[must_use]
pub fn result_summary(count: usize) -> String {
    if count == 1 {
        "1 result found".to_string()
    } else {
        format!("{count} results found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogDocument, MemorySource};
    use crate::testing::sample_destinations;

    fn session() -> DiscoverSession {
        let doc = CatalogDocument {
            interests: vec![
                Interest::new("beach", "Beaches"),
                Interest::new("city", "City Life"),
                Interest::new("culture", "Culture"),
            ],
            destinations: sample_destinations(),
            trails: Vec::new(),
        };
        DiscoverSession::open(&MemorySource::new(doc)).unwrap()
    }

    fn visible_ids(session: &DiscoverSession) -> Vec<String> {
        session.visible().iter().map(|d| d.id.clone()).collect()
    }

    #[test]
    fn test_initially_everything_visible() {
        let session = session();
        assert_eq!(session.visible_count(), sample_destinations().len());
        assert!(!session.criteria().is_active());
        assert_eq!(session.active_tag_count(), 0);
    }

    #[test]
    fn test_query_event_recomputes() {
        let mut session = session();
        session.handle(FilterEvent::QueryChanged("kyo".to_string()));
        assert_eq!(visible_ids(&session), vec!["kyoto"]);
        assert_eq!(session.result_summary(), "1 result found");
    }

    #[test]
    fn test_tag_toggle_twice_restores() {
        let mut session = session();
        let all = visible_ids(&session);

        session.handle(FilterEvent::TagToggled("beach".to_string()));
        assert!(session.is_selected("beach"));
        assert_eq!(session.active_tag_count(), 1);
        assert!(session.visible_count() < all.len());

        session.handle(FilterEvent::TagToggled("beach".to_string()));
        assert!(!session.is_selected("beach"));
        assert_eq!(visible_ids(&session), all);
    }

    #[test]
    fn test_visible_matches_apply() {
        let mut session = session();
        session.handle(FilterEvent::QueryChanged("a".to_string()));
        session.handle(FilterEvent::TagToggled("city".to_string()));

        let expected: Vec<String> =
            filter::apply(&session.catalog().destinations, session.criteria())
                .iter()
                .map(|d| d.id.clone())
                .collect();
        assert_eq!(visible_ids(&session), expected);
    }

    #[test]
    fn test_clear_all() {
        let mut session = session();
        session.handle(FilterEvent::QueryChanged("zzz".to_string()));
        session.handle(FilterEvent::TagToggled("city".to_string()));
        assert!(session.is_empty_result());
        assert_eq!(session.result_summary(), "0 results found");

        session.handle(FilterEvent::ClearAll);
        assert_eq!(session.criteria(), &FilterCriteria::new());
        assert_eq!(session.visible_count(), sample_destinations().len());
    }

    #[test]
    fn test_result_summary_plural() {
        assert_eq!(result_summary(0), "0 results found");
        assert_eq!(result_summary(1), "1 result found");
        assert_eq!(result_summary(12), "12 results found");
    }
}
