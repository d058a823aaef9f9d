// Cloak - PII-aware structured logging and redaction
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

//! # Cloak - PII-aware structured logging
//!
//! Cloak is a logging library for business-management services that
//! guarantees no raw personal data ever reaches an output sink. Every log
//! call is intercepted: the free-text message and every string leaf of the
//! nested context are scanned against an ordered registry of UK-centric
//! detection rules, and only masked, compliance-safe records are emitted.
//!
//! ## Architecture
//!
//! - [`redaction`] - ordered detection rules, masking table, sensitive-key
//!   classifier and the recursive sanitizer
//! - [`logger`] - named loggers, the level gate and emission sinks
//! - [`domain`] - severity levels, log records and error types
//! - [`config`] - TOML-backed configuration with env overrides
//! - [`subscriber`] - `tracing` subscriber stack for the default sink
//!
//! ## Quick Start
//!
//! ```
//! use cloak::{create_logger, LoggerOptions};
//! use serde_json::json;
//!
//! let logger = create_logger("bookings", LoggerOptions::default());
//!
//! let mut ctx = serde_json::Map::new();
//! ctx.insert("customer_email".to_string(), json!("jane.doe@example.com"));
//! ctx.insert("party_size".to_string(), json!(4));
//!
//! // Emitted as: customer_email = "j***e@example.com"
//! logger.info("booking confirmed", Some(ctx));
//! ```
//!
//! ## Ad-hoc sanitization
//!
//! The same rules are available without a logger instance:
//!
//! ```
//! assert_eq!(
//!     cloak::sanitize("Contact john.doe@example.com or call 07911123456"),
//!     "Contact j***e@example.com or call ***3456",
//! );
//! ```
//!
//! ## Guarantees
//!
//! - **Key trumps content**: a context key containing `password`, `token`,
//!   `sortCode` etc. replaces the whole value with `[REDACTED]`, whatever
//!   its type or content.
//! - **Ordering**: detection rules run in a fixed sequence over the
//!   progressively masked text, so overlapping numeric formats (card
//!   numbers vs. bank accounts) are resolved deterministically.
//! - **Idempotence**: masked output never re-triggers a rule; sanitizing
//!   twice is the same as sanitizing once.
//! - **No stack traces**: `error_with` records a sanitized error message
//!   and the error's type name, never a backtrace or `Debug` rendering.
//! - **Fail safe**: sanitization never errors and never panics; anything
//!   unclassifiable is over-redacted, not leaked.

pub mod config;
pub mod domain;
pub mod logger;
pub mod redaction;
pub mod subscriber;

pub use config::LoggingConfig;
pub use domain::{CloakError, Level, LogContext, LogEntry};
pub use logger::{create_logger, BufferSink, EmissionSink, Logger, LoggerOptions, TracingSink};
pub use redaction::{sanitize, sanitize_object, PatternRegistry, PiiCategory, Sanitizer};
pub use subscriber::{init_logging, LoggingGuard};
