//! Discover command - search destinations by text and interests

use crate::catalog::{DataSource, Destination};
use crate::filter::FilterCriteria;
use crate::session::DiscoverSession;
use crate::{RoamrError, cli, output};
use serde::Serialize;
use std::io::Write;
use tracing::warn;

type Result<T> = std::result::Result<T, RoamrError>;

#[derive(Serialize)]
struct DiscoverReport<'a> {
    criteria: &'a FilterCriteria,
    summary: String,
    results: &'a [Destination],
}

/// Execute the discover command
///
/// # Errors
/// Returns an error if the catalog cannot be loaded, a selected interest is
/// not in the catalog's vocabulary, or output fails
pub fn execute(
    source: &dyn DataSource,
    query: Option<&str>,
    tags: &[String],
    json: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = DiscoverSession::open(source)?;

    // a catalog without a vocabulary still filters on raw tag ids
    for tag in tags {
        if session.catalog().interest(tag).is_some() {
            continue;
        }
        if session.interests().is_empty() {
            warn!(interest = %tag, "catalog defines no interests");
        } else {
            return Err(RoamrError::InvalidInput(format!("Unknown interest '{tag}'")));
        }
    }
    for event in cli::discover_events(query, tags) {
        session.handle(event);
    }

    if json {
        let report = DiscoverReport {
            criteria: session.criteria(),
            summary: session.result_summary(),
            results: session.visible(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    if quiet {
        for dest in session.visible() {
            writeln!(out, "{}", output::destination_line(dest, session.catalog(), true))?;
        }
        return Ok(());
    }

    let badge = output::filter_badge(session.active_tag_count());
    if badge.is_empty() {
        writeln!(out, "Discover")?;
    } else {
        writeln!(out, "Discover ({badge})")?;
    }
    for interest in session.interests() {
        let selected = session.is_selected(&interest.id);
        writeln!(out, "{}", output::interest_chip(interest, selected, false))?;
    }
    writeln!(out, "{}", session.result_summary())?;

    if session.is_empty_result() {
        writeln!(out, "{}", output::empty_state())?;
        return Ok(());
    }

    for dest in session.visible() {
        writeln!(out, "{}", output::destination_line(dest, session.catalog(), false))?;
        if let Some(detail) = output::destination_detail(dest) {
            writeln!(out, "{detail}")?;
        }
    }
    Ok(())
}
