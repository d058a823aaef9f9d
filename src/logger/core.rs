//! Named logger with level gating and child namespacing

use crate::domain::entry::{LogContext, LogEntry, MODULE_KEY};
use crate::domain::level::Level;
use crate::logger::sink::{EmissionSink, TracingSink};
use crate::redaction::sanitizer::Sanitizer;
use serde_json::Value;
use std::sync::Arc;

/// Construction options for a [`Logger`]
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// Whether the logger emits at all
    pub enabled: bool,
    /// Minimum severity that passes the gate
    pub min_level: Level,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            min_level: Level::Info,
        }
    }
}

/// A named logger
///
/// Composes the level gate, sanitizer and record assembly. Every message
/// and context value passes through redaction before a record is handed
/// to the sink; there is no code path that emits raw input.
///
/// # Examples
///
/// ```
/// use cloak::{create_logger, Level, LoggerOptions};
/// use serde_json::json;
///
/// let mut logger = create_logger("payroll", LoggerOptions::default());
/// logger.info("run started", None);
///
/// let mut ctx = serde_json::Map::new();
/// ctx.insert("employee_email".to_string(), json!("jane.doe@example.com"));
/// logger.warn("payslip bounced", Some(ctx));
///
/// logger.set_min_level(Level::Error);
/// logger.info("now filtered out", None);
/// ```
pub struct Logger {
    module: String,
    enabled: bool,
    min_level: Level,
    sink: Arc<dyn EmissionSink>,
    sanitizer: Sanitizer,
}

impl Logger {
    /// Create a logger with default options and the [`TracingSink`].
    pub fn new(module: impl Into<String>) -> Self {
        Self::with_options(module, LoggerOptions::default())
    }

    /// Create a logger with explicit options and the [`TracingSink`].
    pub fn with_options(module: impl Into<String>, options: LoggerOptions) -> Self {
        Self::with_sink(module, options, Arc::new(TracingSink))
    }

    /// Create a logger emitting to a specific sink.
    pub fn with_sink(
        module: impl Into<String>,
        options: LoggerOptions,
        sink: Arc<dyn EmissionSink>,
    ) -> Self {
        Self {
            module: module.into(),
            enabled: options.enabled,
            min_level: options.min_level,
            sink,
            sanitizer: Sanitizer::default(),
        }
    }

    /// Module name this logger stamps on every record.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Whether the logger currently emits.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current gate threshold.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Enable or disable emission.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Change the gate threshold.
    pub fn set_min_level(&mut self, level: Level) {
        self.min_level = level;
    }

    /// Derive a namespaced child logger (`"<parent>:<name>"`).
    ///
    /// The child copies `enabled` and `min_level` by value at creation
    /// time and shares the sink; later mutation of the parent does not
    /// affect the child.
    pub fn child(&self, name: &str) -> Logger {
        Logger {
            module: format!("{}:{}", self.module, name),
            enabled: self.enabled,
            min_level: self.min_level,
            sink: Arc::clone(&self.sink),
            sanitizer: self.sanitizer.clone(),
        }
    }

    /// Log at debug severity.
    pub fn debug(&self, message: &str, context: Option<LogContext>) {
        self.log(Level::Debug, message, context);
    }

    /// Log at info severity.
    pub fn info(&self, message: &str, context: Option<LogContext>) {
        self.log(Level::Info, message, context);
    }

    /// Log at warn severity.
    pub fn warn(&self, message: &str, context: Option<LogContext>) {
        self.log(Level::Warn, message, context);
    }

    /// Log at error severity.
    pub fn error(&self, message: &str, context: Option<LogContext>) {
        self.log(Level::Error, message, context);
    }

    /// Log at error severity with an attached error value.
    ///
    /// Merges `error_message` (the error's display string, itself run
    /// through the detection rules) and `error_name` (the error's type
    /// name) into the context. Backtraces and `Debug` renderings are
    /// categorically never emitted: messages elsewhere in a source chain
    /// can embed personal data this logger never saw.
    pub fn error_with<E: std::error::Error>(
        &self,
        message: &str,
        context: Option<LogContext>,
        error: &E,
    ) {
        if !self.passes_gate(Level::Error) {
            return;
        }

        let mut ctx = context.unwrap_or_default();
        ctx.insert(
            "error_message".to_string(),
            Value::String(error.to_string()),
        );
        ctx.insert(
            "error_name".to_string(),
            Value::String(type_basename::<E>().to_string()),
        );
        self.log(Level::Error, message, Some(ctx));
    }

    /// Gate check shared by all entry points. Dropped calls perform no
    /// sanitization work and never reach the sink.
    fn passes_gate(&self, level: Level) -> bool {
        self.enabled && level >= self.min_level
    }

    fn log(&self, level: Level, message: &str, context: Option<LogContext>) {
        if !self.passes_gate(level) {
            return;
        }

        let message = self.sanitizer.sanitize_text(message);
        let mut ctx = context
            .map(|c| self.sanitizer.sanitize_context(&c))
            .unwrap_or_default();
        // The module stamp wins over any caller-supplied value.
        ctx.insert(
            MODULE_KEY.to_string(),
            Value::String(self.module.clone()),
        );

        self.sink.emit(&LogEntry::new(level, message, ctx));
    }
}

/// Create a named logger with the given options (convenience constructor
/// mirroring the `Logger::with_options` form).
pub fn create_logger(module: impl Into<String>, options: LoggerOptions) -> Logger {
    Logger::with_options(module, options)
}

/// Last path segment of a type name: `payroll::ImportError` becomes
/// `ImportError`.
fn type_basename<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
