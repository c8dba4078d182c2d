//! Catalog records
//!
//! Field names follow the catalog document format: destinations list their
//! tags under `interests` and trails use `elevationGain`, both accepted in
//! snake case as well.

use crate::filter::Filterable;
use crate::trails::Difficulty;
use serde::{Deserialize, Serialize};

/// A travel destination shown in the discover list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique, stable identifier
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Interest ids this destination belongs to
    #[serde(default, rename = "interests", alias = "tags")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "imageUrl")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Destination {
    /// Create a destination with a name and region and no tags
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: Some(region.into()),
            description: None,
            tags: Vec::new(),
            country: None,
            image_url: None,
            rating: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}

impl Filterable for Destination {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            self.region.as_deref(),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    fn tag_ids(&self) -> &[String] {
        &self.tags
    }
}

/// An interest (tag) in the filter vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interest {
    pub id: String,

    /// Display name, not used for matching
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Interest {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }
}

/// A curated off-the-beaten-path hiking route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenTrail {
    pub id: u32,

    pub name: String,

    pub location: String,

    /// Display string such as "4-5 hours"
    #[serde(default)]
    pub duration: String,

    /// Display string such as "850 m"
    #[serde(default, alias = "elevationGain")]
    pub elevation_gain: String,

    /// Free-text difficulty label, see [`Difficulty::parse`]
    pub difficulty: String,

    #[serde(default)]
    pub featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HiddenTrail {
    /// Classified difficulty of this trail
    #[must_use]
    pub fn difficulty_level(&self) -> Difficulty {
        Difficulty::parse(&self.difficulty)
    }
}

impl Filterable for HiddenTrail {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            Some(self.location.as_str()),
            self.description.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    fn tag_ids(&self) -> &[String] {
        &[]
    }
}

/// On-disk catalog document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub interests: Vec<Interest>,

    #[serde(default)]
    pub destinations: Vec<Destination>,

    #[serde(default)]
    pub trails: Vec<HiddenTrail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_deserializes_interests_field() {
        let json = r#"{
            "id": "kyoto",
            "name": "Kyoto",
            "region": "Asia",
            "description": "Temples and gardens",
            "interests": ["culture", "city"],
            "imageUrl": "https://example.com/kyoto.jpg"
        }"#;

        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.tags, vec!["culture", "city"]);
        assert_eq!(dest.image_url.as_deref(), Some("https://example.com/kyoto.jpg"));
        assert!(dest.rating.is_none());
    }

    #[test]
    fn test_destination_accepts_tags_alias_and_missing_fields() {
        let json = r#"{ "id": "x", "name": "Somewhere", "tags": ["beach"] }"#;
        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.tags, vec!["beach"]);
        assert!(dest.region.is_none());
        assert!(dest.description.is_none());
    }

    #[test]
    fn test_destination_search_fields_skip_absent() {
        let dest = Destination {
            region: None,
            ..Destination::new("x", "Oslo", "Europe").with_description("Fjords")
        };
        let fields: Vec<&str> = dest.search_fields().collect();
        assert_eq!(fields, vec!["Oslo", "Fjords"]);
    }

    #[test]
    fn test_trail_elevation_gain_alias() {
        let json = r#"{
            "id": 3,
            "name": "Cloud Ridge",
            "location": "Dolomites, Italy",
            "duration": "5 hours",
            "elevationGain": "900 m",
            "difficulty": "Challenging",
            "featured": true
        }"#;
        let trail: HiddenTrail = serde_json::from_str(json).unwrap();
        assert_eq!(trail.elevation_gain, "900 m");
        assert!(trail.featured);
        assert_eq!(trail.difficulty_level(), Difficulty::Hard);
        assert!(trail.tag_ids().is_empty());
    }

    #[test]
    fn test_document_sections_default_to_empty() {
        let doc: CatalogDocument = toml::from_str("").unwrap();
        assert_eq!(doc, CatalogDocument::default());
    }
}
