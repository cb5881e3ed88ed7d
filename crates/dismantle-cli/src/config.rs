//! TOML configuration for the `dismantle` command.
//!
//! Resolution order: `--config <path>`, then `$DISMANTLE_CONFIG`, then
//! `<config dir>/dismantle/config.toml`. A missing default file yields the
//! built-in defaults; a missing explicit file is an error.

use clap::ValueEnum;
use dismantle_core::RepresentativePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "dismantle";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DISMANTLE_CONFIG";

/// Output format of `generate`, `classify` and `catalog`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON
    #[default]
    Json,
    /// Human-readable checklist
    Text,
}

/// `[engine]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Representative selection for mass-proportional rules
    pub policy: RepresentativePolicy,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,
    /// Pretty-print JSON
    pub pretty: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismantleConfig {
    /// Engine settings
    pub engine: EngineConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl DismantleConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config path from an explicit value, the environment, or
    /// the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve(explicit, std::env::var(CONFIG_ENV_VAR).ok()).map(|(path, _)| path)
    }

    /// Loads the configuration.
    ///
    /// An explicit path (argument or non-blank environment value) must
    /// exist; the platform default may be absent, in which case defaults are
    /// returned.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with_env(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    fn load_with_env(explicit: Option<&str>, env_value: Option<String>) -> Result<Self> {
        let Some((path, is_explicit)) = resolve(explicit, env_value) else {
            return Ok(Self::default());
        };

        if !path.exists() {
            if is_explicit {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

/// Resolves the config path and whether it was asked for explicitly.
///
/// A blank environment value counts as unset.
fn resolve(explicit: Option<&str>, env_value: Option<String>) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Some((PathBuf::from(path), true));
    }
    if let Some(path) = env_value
        && !path.trim().is_empty()
    {
        return Some((PathBuf::from(path), true));
    }
    DismantleConfig::default_config_path().map(|path| (path, false))
}
