//! Trails command - list hidden trails

use crate::catalog::{Catalog, DataSource, HiddenTrail};
use crate::filter::{FilterCriteria, FilterExt};
use crate::trails::{self, Difficulty};
use crate::{RoamrError, output};
use std::io::Write;

type Result<T> = std::result::Result<T, RoamrError>;

/// Select trails by text query, difficulty and featured flag, in catalog order
#[must_use]
pub fn select<'a>(
    all: &'a [HiddenTrail],
    query: Option<&str>,
    difficulty: Option<Difficulty>,
    featured_only: bool,
) -> Vec<&'a HiddenTrail> {
    let criteria = FilterCriteria::new().with_query(query.unwrap_or_default());
    trails::by_difficulty(all, difficulty)
        .into_iter()
        .filter(|t| !featured_only || t.featured)
        .filter_criteria(&criteria)
}

/// Execute the trails command
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or output fails
pub fn execute(
    source: &dyn DataSource,
    query: Option<&str>,
    difficulty: Option<Difficulty>,
    featured_only: bool,
    json: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = Catalog::load(source)?;
    let selected = select(&catalog.trails, query, difficulty, featured_only);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&selected)?)?;
        return Ok(());
    }

    if selected.is_empty() {
        if !quiet {
            writeln!(out, "No trails found")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Hidden Trails")?;
        writeln!(out, "Explore offbeat trails, filtered by difficulty")?;
        writeln!(out)?;
    }
    for (i, trail) in selected.iter().enumerate() {
        if i > 0 && !quiet {
            writeln!(out)?;
        }
        writeln!(out, "{}", output::trail_card(trail, quiet))?;
    }
    Ok(())
}
