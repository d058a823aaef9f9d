//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Note that the sanitization pipeline itself never returns an error:
//! it defaults toward over-redaction instead of failing. These variants
//! cover configuration loading and subscriber setup only.

use thiserror::Error;

/// Main Cloak error type
#[derive(Debug, Error)]
pub enum CloakError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Detection pattern compilation errors
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for CloakError {
    fn from(err: std::io::Error) -> Self {
        CloakError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CloakError {
    fn from(err: serde_json::Error) -> Self {
        CloakError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CloakError {
    fn from(err: toml::de::Error) -> Self {
        CloakError::Configuration(format!("TOML parse error: {err}"))
    }
}
