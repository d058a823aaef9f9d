//! Logging configuration
//!
//! TOML-backed configuration with `CLOAK_*` environment variable
//! overrides and validation up front, so a bad level string fails at
//! startup rather than at the first log call.

use crate::domain::errors::CloakError;
use crate::domain::level::Level;
use crate::domain::result::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the logging subsystem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch for all loggers built from this config
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Minimum severity: debug, info, warn or error
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Write records to rolling files in addition to the console
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for rolling log files
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// File rotation cadence: daily or hourly
    #[serde(default = "default_rotation")]
    pub file_rotation: String,
}

fn default_enabled() -> bool {
    true
}

fn default_min_level() -> String {
    "info".to_string()
}

fn default_file_path() -> String {
    "./logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            min_level: default_min_level(),
            file_enabled: false,
            file_path: default_file_path(),
            file_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Load configuration from a TOML file, apply `CLOAK_*` environment
    /// overrides, and validate.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CloakError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CloakError::Configuration(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML content, apply environment
    /// overrides, and validate.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: LoggingConfig = toml::from_str(contents)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Overrides follow the pattern `CLOAK_LOGGING_<KEY>`, e.g.
    /// `CLOAK_LOGGING_MIN_LEVEL=debug`.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CLOAK_LOGGING_ENABLED") {
            self.enabled = val.parse().unwrap_or(self.enabled);
        }
        if let Ok(val) = std::env::var("CLOAK_LOGGING_MIN_LEVEL") {
            self.min_level = val;
        }
        if let Ok(val) = std::env::var("CLOAK_LOGGING_FILE_ENABLED") {
            self.file_enabled = val.parse().unwrap_or(self.file_enabled);
        }
        if let Ok(val) = std::env::var("CLOAK_LOGGING_FILE_PATH") {
            self.file_path = val;
        }
        if let Ok(val) = std::env::var("CLOAK_LOGGING_FILE_ROTATION") {
            self.file_rotation = val;
        }
    }

    /// Validate level and rotation strings.
    pub fn validate(&self) -> Result<()> {
        self.min_level()?;

        match self.file_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(CloakError::Configuration(format!(
                "Invalid file rotation: {other}. Must be one of: daily, hourly"
            ))),
        }
    }

    /// Parsed minimum level.
    pub fn min_level(&self) -> Result<Level> {
        self.min_level.parse()
    }
}
