//! Logger pipeline tests against a capturing sink

use cloak::{BufferSink, Level, LogContext, Logger, LoggerOptions};
use serde_json::json;
use std::sync::Arc;

fn logger_with_sink(options: LoggerOptions) -> (Logger, Arc<BufferSink>) {
    let sink = Arc::new(BufferSink::new());
    let logger = Logger::with_sink("pos", options, sink.clone());
    (logger, sink)
}

fn ctx(pairs: &[(&str, serde_json::Value)]) -> LogContext {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_level_monotonicity() {
    let (logger, sink) = logger_with_sink(LoggerOptions {
        enabled: true,
        min_level: Level::Warn,
    });

    logger.debug("till opened", None);
    logger.info("sale rung up", None);
    assert!(sink.is_empty(), "sub-threshold calls must never reach the sink");

    logger.warn("cash drawer variance", None);
    logger.error("payment declined", None);
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_emitted_line_format() {
    let (logger, sink) = logger_with_sink(LoggerOptions::default());
    logger.info("end of day totals", None);

    let entries = sink.entries();
    let line = entries[0].format_line();
    // "[<ISO-8601>] [INFO] [pos] end of day totals"
    assert!(line.ends_with("] [INFO] [pos] end of day totals"));
    assert!(line.starts_with('['));
    assert!(line.contains('T') && line.contains('Z'));
}

#[test]
fn test_context_attached_only_when_meaningful() {
    let (logger, sink) = logger_with_sink(LoggerOptions::default());

    logger.info("no context", None);
    logger.info("empty context", Some(LogContext::new()));
    logger.info("real context", Some(ctx(&[("till", json!(3))])));

    let entries = sink.entries();
    assert!(entries[0].caller_context().is_none());
    assert!(entries[1].caller_context().is_none());
    let extra = entries[2].caller_context().unwrap();
    assert_eq!(extra.get("till"), Some(&json!(3)));
}

#[test]
fn test_context_values_sanitized_in_pipeline() {
    let (logger, sink) = logger_with_sink(LoggerOptions::default());
    logger.warn(
        "refund flagged for review",
        Some(ctx(&[
            ("customer_email", json!("jane.roe@example.com")),
            ("cardNumber", json!("4111 1111 1111 1111")),
            ("amount", json!(42.5)),
        ])),
    );

    let entries = sink.entries();
    let context = &entries[0].context;
    assert_eq!(context.get("customer_email"), Some(&json!("j***e@example.com")));
    // key classifier wins before the value is even scanned
    assert_eq!(context.get("cardNumber"), Some(&json!("[REDACTED]")));
    assert_eq!(context.get("amount"), Some(&json!(42.5)));
}

#[test]
fn test_every_entry_flagged_sanitized() {
    let (logger, sink) = logger_with_sink(LoggerOptions::default());
    logger.info("a", None);
    logger.error("b", Some(ctx(&[("k", json!("v"))])));

    assert!(sink.entries().iter().all(|e| e.sanitized));
}

#[test]
fn test_child_namespacing_and_isolation() {
    let (mut parent, sink) = logger_with_sink(LoggerOptions {
        enabled: true,
        min_level: Level::Debug,
    });

    let child = parent.child("receipts");
    let grandchild = child.child("email");

    parent.set_min_level(Level::Error);

    child.debug("child still at debug", None);
    grandchild.debug("grandchild too", None);
    parent.debug("parent gated", None);

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].module(), "pos:receipts");
    assert_eq!(entries[1].module(), "pos:receipts:email");
}

#[test]
fn test_error_with_never_leaks_stack_or_source_chain() {
    #[derive(Debug)]
    struct GatewayError {
        inner: std::io::Error,
    }

    impl std::fmt::Display for GatewayError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "gateway rejected request")
        }
    }

    impl std::error::Error for GatewayError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.inner)
        }
    }

    let (logger, sink) = logger_with_sink(LoggerOptions::default());
    let err = GatewayError {
        inner: std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "card 4111 1111 1111 1111 rejected upstream",
        ),
    };
    logger.error_with("charge failed", None, &err);

    let serialized = serde_json::to_string(&sink.entries()[0]).unwrap();
    assert!(serialized.contains("gateway rejected request"));
    assert_eq!(
        sink.entries()[0].context.get("error_name"),
        Some(&json!("GatewayError"))
    );
    // The source chain (which embeds a raw card number) must not appear.
    assert!(!serialized.contains("4111"));
    assert!(!serialized.contains("upstream"));
    assert!(!serialized.contains("ConnectionRefused"));
}

#[test]
fn test_error_with_sanitizes_display_message() {
    let (logger, sink) = logger_with_sink(LoggerOptions::default());
    let err = std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "rejected payslip for QQ123456C",
    );
    logger.error_with("import aborted", None, &err);

    assert_eq!(
        sink.entries()[0].context.get("error_message"),
        Some(&json!("rejected payslip for QQ****C"))
    );
}

#[test]
fn test_disabled_logger_short_circuits() {
    let (logger, sink) = logger_with_sink(LoggerOptions {
        enabled: false,
        min_level: Level::Debug,
    });

    logger.error("nothing flows", Some(ctx(&[("k", json!("v"))])));
    assert!(sink.is_empty());
}

#[test]
fn test_module_key_cannot_be_spoofed() {
    let (logger, sink) = logger_with_sink(LoggerOptions::default());
    logger.info("probe", Some(ctx(&[("module", json!("someone-else"))])));

    assert_eq!(sink.entries()[0].module(), "pos");
}
