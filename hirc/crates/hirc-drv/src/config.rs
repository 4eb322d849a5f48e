//! Configuration module for the hirc driver.
//!
//! Settings come from `hirc.toml`. Command-line flags are applied on top by
//! the binary, so every field here is only a default.

use std::fmt;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use tracing::debug;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "hirc.toml";

/// Illegal-token diagnostics rendered per file unless configured otherwise.
pub const DEFAULT_MAX_ERRORS: usize = 50;

/// How `hirc lex` prints token streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Token::format` line per token
    #[default]
    Debug,
    /// A JSON array of per-file token records
    Json,
    /// Token counts per category
    Summary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Json => "json",
            Self::Summary => "summary",
        })
    }
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Diagnostic settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// `[output]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Colored log output.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// `[diagnostics]` table.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Maximum illegal-token diagnostics rendered per file.
    #[serde(default = "default_max_errors")]
    pub max_errors: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_errors() -> usize {
    DEFAULT_MAX_ERRORS
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches in the following order:
    /// 1. `hirc.toml` in the current directory
    /// 2. `~/.config/hirc/hirc.toml`
    /// 3. The platform configuration directory
    ///
    /// Returns the default configuration if no file is found.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from_dir(&cwd)
    }

    /// Like [`Config::load`], with `dir` standing in for the current directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        match Self::find_config_file(dir) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            DriverError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_dir_config(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("hirc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("hirc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file(dir: &Path) -> Option<PathBuf> {
        Self::check_dir_config(dir)
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
