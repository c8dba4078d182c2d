//! Testing utilities for roamr
//!
//! Fixture collections shared by unit tests across modules.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Destination;

/// The two-destination collection used in the filter examples
///
/// Paris (id `1`, tags `city`) and Kyoto (id `2`, tags `culture`, `city`).
#[must_use]
pub fn paris_and_kyoto() -> Vec<Destination> {
    vec![
        Destination::new("1", "Paris", "Europe").with_tags(["city"]),
        Destination::new("2", "Kyoto", "Asia").with_tags(["culture", "city"]),
    ]
}

/// A varied destination collection
///
/// Covers every tag used in tests (`beach`, `mountains`, `city`, `culture`,
/// `food`), one destination without a description and one without tags.
#[must_use]
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination::new("kyoto", "Kyoto", "Asia")
            .with_description("Temples, moss gardens and tea houses")
            .with_tags(["culture", "city", "food"]),
        Destination::new("santorini", "Santorini", "Europe")
            .with_description("Cliff villages above a volcanic caldera")
            .with_tags(["beach", "food"]),
        Destination::new("banff", "Banff", "North America")
            .with_description("Glacial lakes in the Rockies")
            .with_tags(["mountains"]),
        Destination::new("lisbon", "Lisbon", "Europe")
            .with_description("Hilly streets and yellow trams")
            .with_tags(["city", "food"]),
        Destination::new("bali", "Bali", "Asia").with_tags(["beach", "culture"]),
        Destination::new("cusco", "Cusco", "South America")
            .with_description("Gateway to the Sacred Valley")
            .with_tags(["mountains", "culture"]),
        Destination::new("nowhere", "Unmapped Island", "Pacific"),
    ]
}
