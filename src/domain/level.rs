//! Log severity levels

use crate::domain::errors::CloakError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity level
///
/// Levels are totally ordered: `Debug < Info < Warn < Error`. The derived
/// `Ord` relies on the declaration order below, so the variants must stay
/// in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Verbose diagnostic output
    Debug,
    /// Routine operational messages
    Info,
    /// Recoverable problems worth attention
    Warn,
    /// Failures
    Error,
}

impl Level {
    /// Upper-cased label used in emitted log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = CloakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CloakError::Configuration(format!(
                "Invalid log level: {s}. Must be one of: debug, info, warn, error"
            ))),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::Info
    }
}
