//! Configuration module for roamr
//!
//! Manages application configuration: which catalog to browse and output
//! preferences. Configuration is stored in the user's config directory
//! (`~/.config/roamr/config.toml` on Linux). Values may be overridden with
//! `ROAMR_`-prefixed environment variables, e.g. `ROAMR_CATALOG_PATH`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn environment() -> Environment {
    Environment::with_prefix("ROAMR")
}

const fn default_color() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RoamrConfig {
    /// Catalog file to browse; the bundled catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for RoamrConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            quiet: false,
            color: default_color(),
        }
    }
}

impl RoamrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("roamr").join("config.toml"))
    }

    /// Load configuration from the user's config file and environment
    ///
    /// A missing file yields the defaults; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_layered(&Self::config_path()?, environment())
    }

    /// Optional file at `path`, overridden by `env`
    fn load_layered(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Point the configuration at a catalog file
    pub fn set_catalog(&mut self, path: PathBuf) {
        self.catalog_path = Some(path);
    }

    /// Fall back to the bundled catalog
    pub fn unset_catalog(&mut self) -> Option<PathBuf> {
        self.catalog_path.take()
    }

    /// Catalog path after applying a command-line override
    #[must_use]
    pub fn resolve_catalog<'a>(&'a self, cli_override: Option<&'a Path>) -> Option<&'a Path> {
        cli_override.or(self.catalog_path.as_deref())
    }
}
