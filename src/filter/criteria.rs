//! Filter criteria and its pure transitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current text query plus the set of selected tag ids
///
/// An empty `query` disables the text stage and an empty `selected_tags`
/// disables the tag stage. The query is kept verbatim: `"  "` is an active
/// filter that matches fields containing two consecutive spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively
    #[serde(default)]
    pub query: String,

    /// Selected tag ids (OR semantics within the selection)
    #[serde(default)]
    pub selected_tags: BTreeSet<String>,
}

impl FilterCriteria {
    /// Create empty criteria (no active filters)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Add a tag to the selection
    #[must_use]
    pub fn with_tag(mut self, tag_id: impl Into<String>) -> Self {
        self.selected_tags.insert(tag_id.into());
        self
    }

    /// Add several tags to the selection
    #[must_use]
    pub fn with_tags<I, S>(mut self, tag_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_tags.extend(tag_ids.into_iter().map(Into::into));
        self
    }

    /// Set the query in place
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Toggle a tag in place
    pub fn toggle(&mut self, tag_id: &str) {
        if !self.selected_tags.remove(tag_id) {
            self.selected_tags.insert(tag_id.to_string());
        }
    }

    /// Whether the text stage is active
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether any filter is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.has_query() || !self.selected_tags.is_empty()
    }

    /// Number of selected tags (the badge count on the filter button)
    #[must_use]
    pub fn active_tag_count(&self) -> usize {
        self.selected_tags.len()
    }

    #[must_use]
    pub fn is_selected(&self, tag_id: &str) -> bool {
        self.selected_tags.contains(tag_id)
    }
}

/// Toggle `tag_id` in a selection without mutating it
///
/// Removes the id if present, adds it otherwise. Applying the same toggle
/// twice yields the original selection.
#[must_use]
pub fn toggle_tag(selected_tags: &BTreeSet<String>, tag_id: &str) -> BTreeSet<String> {
    let mut next = selected_tags.clone();
    if !next.remove(tag_id) {
        next.insert(tag_id.to_string());
    }
    next
}

/// Criteria with no active filters
#[must_use]
pub fn clear() -> FilterCriteria {
    FilterCriteria::default()
}
