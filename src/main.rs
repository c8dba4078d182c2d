//! Roamr CLI application entry point
//!
//! Command-line front end for browsing a destination catalog.
//!
//! # Usage
//!
//! ```bash
//! # Browse every destination (default command)
//! roamr
//!
//! # Search by text, narrowed to destinations with any of the given interests
//! roamr discover "kyo"
//! roamr discover -t beach -t food
//!
//! # Hidden trails, filtered by difficulty
//! roamr trails -d hard --featured
//!
//! # Use your own catalog file
//! roamr config set-catalog ~/travel/catalog.json
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. Use `-v`/`-vv`/`-vvv` or set
//! `RUST_LOG` (e.g. `RUST_LOG=roamr=debug`).

use colored::Colorize;
use roamr::{
    RoamrError,
    catalog::{DataSource, open_source},
    cli::{Cli, Commands},
    commands,
    config::RoamrConfig,
};
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, RoamrError>;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn open_catalog(cli: &Cli, config: &RoamrConfig) -> Result<Box<dyn DataSource>> {
    let catalog_path = config.resolve_catalog(cli.catalog.as_deref());
    debug!(catalog = ?catalog_path, "opening catalog");
    Ok(open_source(catalog_path)?)
}

fn run(cli: &Cli) -> Result<()> {
    let config = RoamrConfig::load()?;
    if !config.color {
        colored::control::set_override(false);
    }

    let quiet = cli.quiet || config.quiet;
    let mut stdout = io::stdout().lock();

    match cli.get_command() {
        Commands::Discover { query, tags, json } => {
            let source = open_catalog(cli, &config)?;
            commands::discover(&*source, query.as_deref(), &tags, json, quiet, &mut stdout)
        }
        Commands::Interests { json } => {
            let source = open_catalog(cli, &config)?;
            commands::interests(&*source, json, quiet, &mut stdout)
        }
        Commands::Trails {
            query,
            difficulty,
            featured,
            json,
        } => {
            let source = open_catalog(cli, &config)?;
            commands::trails(
                &*source,
                query.as_deref(),
                difficulty,
                featured,
                json,
                quiet,
                &mut stdout,
            )
        }
        Commands::Config { command } => {
            let config_path = RoamrConfig::config_path()?;
            commands::config(config, &config_path, &command, quiet, &mut stdout)
        }
        Commands::Completions { shell } => commands::completions(shell, &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("{} {e}", "❌".red());
            ExitCode::FAILURE
        }
    }
}
