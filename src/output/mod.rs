//! Output formatting for CLI display
//!
//! This module renders destinations, interests and trails as terminal text.
//! Every formatter has a quiet form that prints only the identifier, for
//! piping into other tools.

use crate::catalog::{Catalog, Destination, HiddenTrail, Interest};
use crate::trails::Difficulty;
use colored::Colorize;

/// Format a destination as a single list line
#[must_use]
pub fn destination_line(dest: &Destination, catalog: &Catalog, quiet: bool) -> String {
    if quiet {
        return dest.id.clone();
    }

    let mut line = format!("  {}", dest.name.bold());
    if let Some(country) = &dest.country {
        line.push_str(&format!(", {country}"));
    }
    if let Some(region) = &dest.region {
        line.push_str(&format!(" {}", format!("({region})").dimmed()));
    }
    if let Some(rating) = dest.rating {
        line.push_str(&format!(" {}", format!("★ {rating:.1}").yellow()));
    }
    if !dest.tags.is_empty() {
        let labels: Vec<&str> = dest.tags.iter().map(|t| catalog.interest_label(t)).collect();
        line.push_str(&format!(" [{}]", labels.join(", ")));
    }
    line
}

/// Format a destination's description as an indented follow-up line
#[must_use]
pub fn destination_detail(dest: &Destination) -> Option<String> {
    dest.description
        .as_ref()
        .map(|d| format!("    {}", d.dimmed()))
}

/// Format an interest chip with its selection state
#[must_use]
pub fn interest_chip(interest: &Interest, selected: bool, quiet: bool) -> String {
    if quiet {
        return interest.id.clone();
    }

    if selected {
        format!("  {} {} ({})", "[x]".green(), interest.label.green().bold(), interest.id)
    } else {
        format!("  [ ] {} ({})", interest.label, interest.id)
    }
}

/// Color text with a difficulty's accent color
#[must_use]
pub fn colorize_difficulty(text: &str, level: Difficulty) -> String {
    let (r, g, b) = level.rgb();
    text.truecolor(r, g, b).to_string()
}

/// Format a trail as a multi-line card
#[must_use]
pub fn trail_card(trail: &HiddenTrail, quiet: bool) -> String {
    if quiet {
        return trail.id.to_string();
    }

    let level = trail.difficulty_level();
    let marker = colorize_difficulty("┃", level);

    let mut title = format!("{marker} {}", trail.name.bold());
    if trail.featured {
        title.push_str(&format!(" {}", "★ Featured".yellow()));
    }

    let mut lines = vec![
        title,
        format!("{marker} {}", trail.location),
        format!("{marker} {} · {}", trail.duration, trail.elevation_gain),
        format!("{marker} {}", colorize_difficulty(&trail.difficulty, level)),
    ];
    if let Some(description) = &trail.description {
        lines.push(format!("{marker} {}", description.dimmed()));
    }
    lines.join("\n")
}

/// Header line showing the active tag count badge
#[must_use]
pub fn filter_badge(active_tags: usize) -> String {
    match active_tags {
        0 => String::new(),
        1 => "1 interest selected".to_string(),
        n => format!("{n} interests selected"),
    }
}

/// Message shown when no destination passes the filters
#[must_use]
pub fn empty_state() -> String {
    format!(
        "{}\n{}",
        "No destinations found".bold(),
        "Try different filters or search terms.".dimmed()
    )
}
