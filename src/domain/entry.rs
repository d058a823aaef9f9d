//! Structured log entry model

use crate::domain::level::Level;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Context attached to a log call: string keys mapped to JSON-like values
/// (string, number, boolean, null, nested object, array).
pub type LogContext = serde_json::Map<String, Value>;

/// Key injected into every emitted context with the owning logger's module
/// name. Caller-supplied values under this key are overwritten.
pub const MODULE_KEY: &str = "module";

/// A fully sanitized, structured log record
///
/// Entries can only be constructed by the logging pipeline after the
/// message and context have passed through redaction, which is why the
/// constructor is crate-private and `sanitized` is unconditionally `true`.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Time the log call was made
    pub timestamp: DateTime<Utc>,
    /// Severity of the call
    pub level: Level,
    /// Sanitized message text
    pub message: String,
    /// Sanitized context, always carrying [`MODULE_KEY`]
    pub context: LogContext,
    /// Always `true`; kept on the wire so downstream collectors can assert
    /// that a record went through the redaction pipeline
    pub sanitized: bool,
}

impl LogEntry {
    pub(crate) fn new(level: Level, message: String, context: LogContext) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message,
            context,
            sanitized: true,
        }
    }

    /// Module name recorded in the context
    pub fn module(&self) -> &str {
        self.context
            .get(MODULE_KEY)
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Render the single-line form: `[<timestamp>] [<LEVEL>] [<module>] <message>`
    pub fn format_line(&self) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.module(),
            self.message
        )
    }

    /// Caller-supplied portion of the context, i.e. everything except the
    /// implicitly injected module key. Returns `None` when empty, which is
    /// the signal to sinks that no structured payload should be attached.
    pub fn caller_context(&self) -> Option<LogContext> {
        let extra: LogContext = self
            .context
            .iter()
            .filter(|(k, _)| k.as_str() != MODULE_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if extra.is_empty() {
            None
        } else {
            Some(extra)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_context() -> LogContext {
        let mut ctx = LogContext::new();
        ctx.insert(MODULE_KEY.to_string(), json!("payroll"));
        ctx
    }

    #[test]
    fn test_entry_is_always_sanitized() {
        let entry = LogEntry::new(Level::Info, "hello".to_string(), sample_context());
        assert!(entry.sanitized);
    }

    #[test]
    fn test_format_line_shape() {
        let entry = LogEntry::new(Level::Warn, "low balance".to_string(), sample_context());
        let line = entry.format_line();
        assert!(line.contains("[WARN] [payroll] low balance"));
        assert!(line.starts_with('['));
    }

    #[test]
    fn test_caller_context_excludes_module() {
        let mut ctx = sample_context();
        ctx.insert("employee_count".to_string(), json!(12));

        let entry = LogEntry::new(Level::Info, "run".to_string(), ctx);
        let extra = entry.caller_context().unwrap();
        assert_eq!(extra.len(), 1);
        assert_eq!(extra.get("employee_count"), Some(&json!(12)));
    }

    #[test]
    fn test_caller_context_none_when_only_module() {
        let entry = LogEntry::new(Level::Info, "run".to_string(), sample_context());
        assert!(entry.caller_context().is_none());
    }

    #[test]
    fn test_entry_serializes_to_json() {
        let entry = LogEntry::new(Level::Error, "boom".to_string(), sample_context());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["level"], json!("error"));
        assert_eq!(value["sanitized"], json!(true));
    }
}
