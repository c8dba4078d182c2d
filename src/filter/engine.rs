//! Filter predicates and collection filtering
//!
//! # Iterator Adapters
//!
//! [`FilterExt`] adds criteria filtering to any iterator of [`Filterable`]
//! items, for callers that own their collection:
//!
//! ```
//! use roamr::catalog::Destination;
//! use roamr::filter::{FilterCriteria, FilterExt};
//!
//! let items = vec![
//!     Destination::new("1", "Paris", "Europe").with_tags(["city"]),
//!     Destination::new("2", "Kyoto", "Asia").with_tags(["culture", "city"]),
//! ];
//!
//! let visible = items
//!     .into_iter()
//!     .filter_criteria(&FilterCriteria::new().with_tag("culture"));
//! assert_eq!(visible.len(), 1);
//! ```

use super::criteria::FilterCriteria;
use std::collections::BTreeSet;

/// A record that can be searched by text and selected by tag
pub trait Filterable {
    /// Text fields searched by the query
    ///
    /// Absent fields are simply not yielded, so they never match.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// Tag ids the record belongs to
    fn tag_ids(&self) -> &[String];
}

impl<T: Filterable> Filterable for &T {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        (**self).search_fields()
    }

    fn tag_ids(&self) -> &[String] {
        (**self).tag_ids()
    }
}

/// Text stage: does any searchable field contain `query` (case-insensitive)?
///
/// An empty query passes every item.
#[must_use]
pub fn matches_text<T: Filterable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    contains_lowered(item, &query.to_lowercase())
}

/// Tag stage: does the item share at least one tag with the selection?
///
/// An empty selection passes every item.
#[must_use]
pub fn matches_tags<T: Filterable + ?Sized>(item: &T, selected_tags: &BTreeSet<String>) -> bool {
    selected_tags.is_empty() || item.tag_ids().iter().any(|tag| selected_tags.contains(tag))
}

/// Both stages combined
#[must_use]
pub fn matches<T: Filterable + ?Sized>(item: &T, criteria: &FilterCriteria) -> bool {
    matches_text(item, &criteria.query) && matches_tags(item, &criteria.selected_tags)
}

/// Compute the visible subset of `items` for `criteria`
///
/// Returns references in the original relative order. `items` is never
/// modified and the result depends only on the two arguments.
#[must_use]
pub fn apply<'a, T: Filterable>(items: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
    let query = criteria.query.to_lowercase();
    items
        .iter()
        .filter(|item| passes(*item, &query, &criteria.selected_tags))
        .collect()
}

// `query` must already be lower-cased
fn passes<T: Filterable + ?Sized>(item: &T, query: &str, selected_tags: &BTreeSet<String>) -> bool {
    (query.is_empty() || contains_lowered(item, query)) && matches_tags(item, selected_tags)
}

fn contains_lowered<T: Filterable + ?Sized>(item: &T, query: &str) -> bool {
    item.search_fields()
        .any(|field| field.to_lowercase().contains(query))
}

/// Extension trait for filtering owned collections by criteria
pub trait FilterExt: IntoIterator + Sized
where
    Self::Item: Filterable,
{
    /// Keep the items matching `criteria`, preserving order
    fn filter_criteria(self, criteria: &FilterCriteria) -> Vec<Self::Item> {
        let query = criteria.query.to_lowercase();
        self.into_iter()
            .filter(|item| passes(item, &query, &criteria.selected_tags))
            .collect()
    }
}

// Implement for any iterator that yields filterable items
impl<I> FilterExt for I
where
    I: IntoIterator,
    I::Item: Filterable,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Destination;
    use crate::testing::{paris_and_kyoto, sample_destinations};

    fn ids<T: std::ops::Deref<Target = Destination>>(items: &[T]) -> Vec<&str> {
        items.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_query_matches_name() {
        let items = paris_and_kyoto();
        let result = apply(&items, &FilterCriteria::new().with_query("kyo"));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_selected_tag_matches() {
        let items = paris_and_kyoto();
        let result = apply(&items, &FilterCriteria::new().with_tag("culture"));
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let items = paris_and_kyoto();
        let result = apply(&items, &FilterCriteria::new().with_query("zzz"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let items = sample_destinations();
        let result = apply(&items, &FilterCriteria::new());
        assert_eq!(result.len(), items.len());
        assert!(result.iter().zip(items.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<Destination> = Vec::new();
        let criteria = FilterCriteria::new().with_query("a").with_tag("city");
        assert!(apply(&items, &criteria).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let items = paris_and_kyoto();
        assert_eq!(ids(&apply(&items, &FilterCriteria::new().with_query("PARIS"))), vec!["1"]);
        assert_eq!(ids(&apply(&items, &FilterCriteria::new().with_query("aSiA"))), vec!["2"]);
    }

    #[test]
    fn test_query_matches_region_and_description() {
        let items = vec![
            Destination::new("a", "Lisbon", "Europe").with_description("Tiled facades and trams"),
            Destination::new("b", "Hanoi", "Asia").with_description("Street food capital"),
        ];
        assert_eq!(ids(&apply(&items, &FilterCriteria::new().with_query("trams"))), vec!["a"]);
        assert_eq!(ids(&apply(&items, &FilterCriteria::new().with_query("euro"))), vec!["a"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let items = vec![
            Destination::new("a", "Cape Town", "Africa"),
            Destination::new("b", "Oslo", "Europe"),
        ];
        let result = apply(&items, &FilterCriteria::new().with_query(" "));
        assert_eq!(ids(&result), vec!["a"]);

        let result = apply(&items, &FilterCriteria::new().with_query(" oslo"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_fields_do_not_match() {
        let bare = Destination {
            region: None,
            description: None,
            ..Destination::new("x", "Nowhere", "")
        };
        assert!(!matches_text(&bare, "europe"));
        assert!(matches_text(&bare, "where"));
    }

    #[test]
    fn test_tags_are_or_within_selection() {
        let items = sample_destinations();
        let criteria = FilterCriteria::new().with_tags(["beach", "mountains"]);
        let result = apply(&items, &criteria);

        assert!(!result.is_empty());
        for item in &result {
            assert!(item.tags.iter().any(|t| t == "beach" || t == "mountains"));
        }
        for item in &items {
            let shares = item.tags.iter().any(|t| t == "beach" || t == "mountains");
            assert_eq!(result.iter().any(|r| r.id == item.id), shares);
        }
    }

    #[test]
    fn test_stages_are_combined_with_and() {
        let items = paris_and_kyoto();
        // "city" matches both, "paris" only the first
        let criteria = FilterCriteria::new().with_query("paris").with_tag("city");
        assert_eq!(ids(&apply(&items, &criteria)), vec!["1"]);

        // query matches Paris, tag only Kyoto: nothing passes both
        let criteria = FilterCriteria::new().with_query("paris").with_tag("culture");
        assert!(apply(&items, &criteria).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let items = sample_destinations();
        let criteria = FilterCriteria::new().with_query("a");
        let result = apply(&items, &criteria);

        let mut cursor = 0;
        for item in &result {
            let pos = items[cursor..]
                .iter()
                .position(|candidate| candidate.id == item.id)
                .expect("result item must appear later in the input");
            cursor += pos + 1;
        }
    }

    #[test]
    fn test_result_agrees_with_predicates() {
        let items = sample_destinations();
        let criteria = FilterCriteria::new().with_query("e").with_tag("culture");
        let result = apply(&items, &criteria);

        for item in &items {
            let expected = matches_text(item, &criteria.query)
                && matches_tags(item, &criteria.selected_tags);
            assert_eq!(result.iter().any(|r| r.id == item.id), expected, "{}", item.id);
            assert_eq!(matches(item, &criteria), expected);
        }
    }

    #[test]
    fn test_apply_is_deterministic() {
        let items = sample_destinations();
        let criteria = FilterCriteria::new().with_query("is").with_tags(["city", "food"]);
        assert_eq!(apply(&items, &criteria), apply(&items, &criteria));
    }

    #[test]
    fn test_filter_ext_matches_apply() {
        let items = sample_destinations();
        let criteria = FilterCriteria::new().with_query("o").with_tag("city");

        let borrowed: Vec<Destination> = apply(&items, &criteria).into_iter().cloned().collect();
        let owned = items.clone().into_iter().filter_criteria(&criteria);
        assert_eq!(owned, borrowed);
    }

    #[test]
    fn test_filter_ext_over_references() {
        let items = paris_and_kyoto();
        let result = items.iter().filter_criteria(&FilterCriteria::new().with_query("kyoto"));
        assert_eq!(ids(&result), vec!["2"]);
    }
}
