//! Emission sinks
//!
//! Sinks receive fully sanitized [`LogEntry`] records and decide where
//! they go. The contract is one line per call in the shape
//! `"[<timestamp>] [<LEVEL>] [<module>] <message>"`, with the caller
//! context attached as a structured payload only when it is non-empty
//! after excluding the implicit `module` field.

use crate::domain::entry::LogEntry;
use crate::domain::level::Level;
use serde_json::Value;
use std::sync::Mutex;

/// External destination for sanitized records
///
/// Implementations must not inspect anything beyond the entry they are
/// handed; every field has already been through redaction.
pub trait EmissionSink: Send + Sync {
    /// Deliver one sanitized record.
    fn emit(&self, entry: &LogEntry);
}

/// Default sink: routes records through the `tracing` macros so the host
/// application's subscriber stack (console, rolling files, collectors)
/// handles the actual output. Level routing follows the channel
/// contract: `error` to the error channel, `warn` to warn, `debug` to
/// debug, `info` to the default channel.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EmissionSink for TracingSink {
    fn emit(&self, entry: &LogEntry) {
        let line = entry.format_line();
        match entry.caller_context() {
            Some(ctx) => {
                let context = Value::Object(ctx).to_string();
                match entry.level {
                    Level::Error => tracing::error!(context = %context, "{line}"),
                    Level::Warn => tracing::warn!(context = %context, "{line}"),
                    Level::Debug => tracing::debug!(context = %context, "{line}"),
                    Level::Info => tracing::info!(context = %context, "{line}"),
                }
            }
            None => match entry.level {
                Level::Error => tracing::error!("{line}"),
                Level::Warn => tracing::warn!("{line}"),
                Level::Debug => tracing::debug!("{line}"),
                Level::Info => tracing::info!("{line}"),
            },
        }
    }
}

/// In-memory sink that captures entries for inspection. Used by the test
/// suite and by host applications that assert on log output.
#[derive(Debug, Default)]
pub struct BufferSink {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferSink {
    /// Create an empty buffer sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured entries.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.clear();
        }
    }
}

impl EmissionSink for BufferSink {
    fn emit(&self, entry: &LogEntry) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(entry.clone());
        }
    }
}
