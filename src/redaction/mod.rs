//! PII detection and redaction
//!
//! This module is the heart of the crate: an ordered registry of detection
//! rules for regulated UK personal-data formats, a per-category masking
//! table, a sensitive-key classifier, and a recursive sanitizer for
//! free-text messages and nested context objects.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: ordered, regex-based rules ([`PatternRegistry`])
//! - **Masking**: partial-disclosure replacements per category ([`mask`])
//! - **Classification**: key-name based whole-value redaction ([`keys`])
//! - **Sanitization**: recursive, purely functional traversal ([`Sanitizer`])
//!
//! Rule ordering is a correctness property: rules run sequentially over
//! the progressively masked text so that longer numeric formats consume
//! their digits before broader rules can partially match a fragment, and
//! masked literals (which contain non-digit filler) never re-trigger a
//! later rule.

pub mod category;
pub mod keys;
pub mod mask;
pub mod patterns;
pub mod sanitizer;

pub use category::PiiCategory;
pub use patterns::{DetectionRule, PatternRegistry};
pub use sanitizer::{sanitize, sanitize_object, Sanitizer};

/// Placeholder for values that must never be partially disclosed
pub const REDACTED: &str = "[REDACTED]";

/// Placeholder for access and secret tokens
pub const REDACTED_TOKEN: &str = "[REDACTED_TOKEN]";
