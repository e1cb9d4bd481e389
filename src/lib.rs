//! # Service Log
//!
//! A structured service-logging facade: per-component logger instances shape
//! one canonical JSON record per call and hand it synchronously to pluggable
//! transports.
//!
//! ## Features
//!
//! - **Canonical Records**: timestamp, service name, component, severity,
//!   environment, description and a free-form data payload on every line
//! - **Per-Level Calls**: `debug`/`info`/`warn`/`error`, each with a
//!   payload-carrying `_with` variant
//! - **Pluggable Transports**: console, JSONL file, and in-memory capture
//! - **Flexible Configuration**: environment variables, process-wide
//!   defaults, or an explicitly injected config snapshot

pub mod core;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        get_logger, init, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, Payload,
        RecordFormat, Result, Severity, Status, TimestampFormat, Transport,
    };
    pub use crate::transports::{ConsoleTransport, FileTransport, MemoryTransport};
}

pub use crate::core::{
    get_logger, init, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError, Payload,
    RecordFormat, Result, Severity, Status, TimestampFormat, Transport,
};
pub use crate::transports::{ConsoleTransport, FileTransport, MemoryTransport};
