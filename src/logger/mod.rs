//! Named loggers and emission sinks
//!
//! A [`Logger`] composes the level gate, the sanitizer and record assembly
//! into `debug`/`info`/`warn`/`error` entry points. The only I/O boundary
//! is the [`EmissionSink`] trait; the core itself performs none.

pub mod core;
pub mod sink;

pub use self::core::{create_logger, Logger, LoggerOptions};
pub use sink::{BufferSink, EmissionSink, TracingSink};
