//! Client-side filtering of catalog items
//!
//! This module holds the filter core used by the discover view:
//! - `FilterCriteria`: the free-text query plus the selected tag set
//! - `apply`: computes the visible subset of a collection for given criteria
//! - `toggle_tag` / `clear`: pure criteria transitions driven by user events
//!
//! Matching rules:
//! - The query is lower-cased (never trimmed) and matched as a substring of
//!   any searchable text field (OR across fields)
//! - A non-empty tag selection keeps items sharing at least one selected tag
//! - An item is visible only if it passes both stages
//!
//! # Examples
//!
//! ```
//! use roamr::catalog::Destination;
//! use roamr::filter::{FilterCriteria, apply};
//!
//! let items = vec![
//!     Destination::new("1", "Paris", "Europe").with_tags(["city"]),
//!     Destination::new("2", "Kyoto", "Asia").with_tags(["culture", "city"]),
//! ];
//!
//! let criteria = FilterCriteria::new().with_query("kyo");
//! let visible = apply(&items, &criteria);
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].id, "2");
//! ```

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, clear, toggle_tag};
pub use engine::{FilterExt, Filterable, apply, matches, matches_tags, matches_text};
