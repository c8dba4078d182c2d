//! Hidden trail difficulty classification
//!
//! Trail difficulty arrives as a free-text label. Labels are classified
//! case-insensitively; "challenging" counts as hard, and anything unknown
//! is unrated. Each level carries a fixed accent color.

use crate::catalog::HiddenTrail;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified trail difficulty
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    /// Includes trails labelled "challenging"
    #[value(alias = "challenging")]
    Hard,
    Expert,
    /// Any label not recognised above
    Unrated,
}

impl Difficulty {
    /// Classify a free-text difficulty label
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "easy" => Self::Easy,
            "moderate" => Self::Moderate,
            "hard" | "challenging" => Self::Hard,
            "expert" => Self::Expert,
            _ => Self::Unrated,
        }
    }

    /// Accent color as a `#RRGGBB` hex string
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Easy => "#10B981",
            Self::Moderate => "#F59E0B",
            Self::Hard => "#EF4444",
            Self::Expert => "#7C3AED",
            Self::Unrated => "#3B82F6",
        }
    }

    /// Accent color as RGB components
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Easy => (0x10, 0xB9, 0x81),
            Self::Moderate => (0xF5, 0x9E, 0x0B),
            Self::Hard => (0xEF, 0x44, 0x44),
            Self::Expert => (0x7C, 0x3A, 0xED),
            Self::Unrated => (0x3B, 0x82, 0xF6),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
            Self::Expert => "expert",
            Self::Unrated => "unrated",
        };
        f.write_str(name)
    }
}

/// Accent color for a raw difficulty label
#[must_use]
pub fn difficulty_color(label: &str) -> &'static str {
    Difficulty::parse(label).color()
}

/// Keep trails of the given difficulty, preserving order
///
/// `None` keeps every trail.
#[must_use]
pub fn by_difficulty(trails: &[HiddenTrail], level: Option<Difficulty>) -> Vec<&HiddenTrail> {
    trails
        .iter()
        .filter(|t| level.is_none_or(|level| t.difficulty_level() == level))
        .collect()
}

/// Keep featured trails, preserving order
#[must_use]
pub fn featured(trails: &[HiddenTrail]) -> Vec<&HiddenTrail> {
    trails.iter().filter(|t| t.featured).collect()
}
