//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `PORTFOLIO_*` environment variables, then CLI flags (applied by the
//! command layer).

use crate::app::services::csv_parser::ParseOptions;
use crate::app::services::record_mapper::ColumnAliases;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CSV_PATH, DEFAULT_INDEX_PATH, DEFAULT_LOG_LEVEL,
    LOG_LEVELS, PORTFOLIO_END_MARKER, PORTFOLIO_START_MARKER, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the portfolio CSV comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// CSV asset read when no file is given on the command line
    pub csv_path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

/// Static page regeneration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page containing the portfolio markers and stat blocks
    pub index_path: PathBuf,

    pub start_marker: String,

    pub end_marker: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            start_marker: PORTFOLIO_START_MARKER.to_string(),
            end_marker: PORTFOLIO_END_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when neither RUST_LOG nor -v/-q are given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Global configuration for portfolio ingestion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub parser: ParseOptions,
    pub columns: ColumnAliases,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location (`<config dir>/portfolio-ingest/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e| Error::config_parse(path.display().to_string(), e))
    }

    /// Load defaults, then the config file (if any), then environment overrides
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PORTFOLIO_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_vars::CSV_PATH).filter(|v| !v.is_empty()) {
            debug!("{} overrides csv path", env_vars::CSV_PATH);
            self.input.csv_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(env_vars::INDEX_PATH).filter(|v| !v.is_empty()) {
            debug!("{} overrides index path", env_vars::INDEX_PATH);
            self.render.index_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup(env_vars::TRIM_QUOTED) {
            self.parser.trim_quoted_fields = parse_bool(&flag).ok_or_else(|| {
                Error::configuration(format!(
                    "{} must be true/false, got '{}'",
                    env_vars::TRIM_QUOTED,
                    flag
                ))
            })?;
        }

        Ok(())
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<()> {
        let empty = self.columns.empty_fields();
        if !empty.is_empty() {
            let names: Vec<String> = empty.iter().map(|f| f.to_string()).collect();
            return Err(Error::configuration(format!(
                "Column aliases cannot be empty for: {}",
                names.join(", ")
            )));
        }

        if self.render.start_marker.trim().is_empty() || self.render.end_marker.trim().is_empty() {
            return Err(Error::configuration("Render markers cannot be empty"));
        }

        if self.render.start_marker == self.render.end_marker {
            return Err(Error::configuration(
                "Render start and end markers must differ",
            ));
        }

        if !LOG_LEVELS
            .iter()
            .any(|level| level.eq_ignore_ascii_case(&self.logging.level))
        {
            return Err(Error::configuration(format!(
                "Invalid logging level '{}'. Expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Override the CSV path
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input.csv_path = path.into();
        self
    }

    /// Override the index page path
    pub fn with_index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.render.index_path = path.into();
        self
    }

    /// Keep whitespace written inside quoted fields
    pub fn preserving_quoted_whitespace(mut self) -> Self {
        self.parser.trim_quoted_fields = false;
        self
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
