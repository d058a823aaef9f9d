//! Core domain types
//!
//! This module defines the types shared across the crate: the severity
//! [`Level`], the structured [`LogEntry`] record, the [`LogContext`]
//! mapping, and the error hierarchy.

pub mod entry;
pub mod errors;
pub mod level;
pub mod result;

pub use entry::{LogContext, LogEntry};
pub use errors::CloakError;
pub use level::Level;
pub use result::Result;
