//! Interests command - list the interest vocabulary

use crate::catalog::{Catalog, DataSource};
use crate::{RoamrError, output};
use std::io::Write;

type Result<T> = std::result::Result<T, RoamrError>;

/// Execute the interests command
///
/// Each interest is shown with the number of destinations tagged with it.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or output fails
pub fn execute(
    source: &dyn DataSource,
    json: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = Catalog::load(source)?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&catalog.interests)?)?;
        return Ok(());
    }

    if catalog.interests.is_empty() {
        if !quiet {
            writeln!(out, "No interests in catalog.")?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(out, "Interests:")?;
    }
    for interest in &catalog.interests {
        let chip = output::interest_chip(interest, false, quiet);
        if quiet {
            writeln!(out, "{chip}")?;
        } else {
            let count = catalog
                .destinations
                .iter()
                .filter(|d| d.tags.contains(&interest.id))
                .count();
            writeln!(out, "{chip} - {count} destination(s)")?;
        }
    }
    Ok(())
}
