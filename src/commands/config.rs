//! Config command - show and change configuration

use crate::catalog::FileSource;
use crate::cli::ConfigCommands;
use crate::config::RoamrConfig;
use crate::RoamrError;
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::info;

type Result<T> = std::result::Result<T, RoamrError>;

/// Execute a config subcommand against the config file at `config_path`
///
/// # Errors
/// Returns an error if the configuration cannot be saved, the catalog
/// being configured cannot be opened, or output fails
pub fn execute(
    mut config: RoamrConfig,
    config_path: &Path,
    command: &ConfigCommands,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            write!(out, "{}", toml::to_string_pretty(&config)?)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
        ConfigCommands::SetCatalog { path } => {
            // reject catalogs that would fail on the next run
            let source = FileSource::open(path)?;
            let absolute = std::fs::canonicalize(source.path())?;
            config.set_catalog(absolute.clone());
            config.save_to(config_path)?;
            info!(catalog = %absolute.display(), "catalog configured");
            if !quiet {
                writeln!(out, "{} Catalog set to {}", "✓".green(), absolute.display())?;
            }
        }
        ConfigCommands::UnsetCatalog => {
            let previous = config.unset_catalog();
            config.save_to(config_path)?;
            if !quiet {
                match previous {
                    Some(path) => writeln!(
                        out,
                        "Catalog {} unset, using bundled catalog",
                        path.display()
                    )?,
                    None => writeln!(out, "Already using bundled catalog")?,
                }
            }
        }
    }
    Ok(())
}
