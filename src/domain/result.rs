//! Result type alias for Cloak

use super::errors::CloakError;

/// Result type alias for Cloak operations
///
/// # Examples
///
/// ```
/// use cloak::domain::result::Result;
/// use cloak::domain::errors::CloakError;
///
/// fn parse_setting(raw: &str) -> Result<bool> {
///     raw.parse()
///         .map_err(|_| CloakError::Configuration(format!("not a boolean: {raw}")))
/// }
///
/// assert!(parse_setting("true").is_ok());
/// assert!(parse_setting("maybe").is_err());
/// ```
pub type Result<T> = std::result::Result<T, CloakError>;
