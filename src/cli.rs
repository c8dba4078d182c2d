//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for roamr using the `clap` crate.
//!
//! # Commands
//!
//! - **discover**: Search destinations by text and interests (default)
//! - **interests**: List the interest vocabulary
//! - **trails**: List hidden trails, optionally by difficulty
//! - **config**: Show or change the configuration
//! - **completions**: Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! roamr discover kyo
//! roamr d -t beach -t food
//! roamr trails -d hard --featured
//! roamr --catalog my_places.json interests
//! ```

use crate::filter::FilterCriteria;
use crate::session::FilterEvent;
use crate::trails::Difficulty;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roamr")]
#[command(about = "Discover destinations and hidden trails", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to browse (overrides config)
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Search destinations by text and interests
    #[command(visible_alias = "d")]
    Discover {
        /// Text matched against name, region and description
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Interest ids to select (a destination needs any one of them)
        #[arg(short = 't', long = "tag", value_name = "ID")]
        tags: Vec<String>,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List the interest vocabulary
    #[command(visible_alias = "i")]
    Interests {
        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List hidden trails
    #[command(visible_alias = "t")]
    Trails {
        /// Text matched against name, location and description
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only trails of this difficulty
        #[arg(short = 'd', long = "difficulty", value_enum)]
        difficulty: Option<Difficulty>,

        /// Only featured trails
        #[arg(long = "featured")]
        featured: bool,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Browse a catalog file by default
    #[command(name = "set-catalog")]
    SetCatalog {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
    /// Go back to the bundled catalog
    #[command(name = "unset-catalog")]
    UnsetCatalog,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run; `discover` with no filters when none was given
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Discover {
            query: None,
            tags: Vec::new(),
            json: false,
        })
    }

    /// Tracing filter directive for the `-v` count
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Translate discover arguments into the events a user would have produced
///
/// Repeated tag ids are deduplicated so a tag given twice stays selected
/// rather than toggling back off.
#[must_use]
pub fn discover_events(query: Option<&str>, tags: &[String]) -> Vec<FilterEvent> {
    let mut events = Vec::new();
    if let Some(query) = query {
        events.push(FilterEvent::QueryChanged(query.to_string()));
    }

    let wanted = FilterCriteria::new().with_tags(tags.iter().cloned());
    events.extend(wanted.selected_tags.into_iter().map(FilterEvent::TagToggled));
    events
}
