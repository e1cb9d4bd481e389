//! Core facade types and traits

pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod payload;
pub mod record;
pub mod severity;
pub mod timestamp;
pub mod transport;

pub use config::{init, LoggerConfig};
pub use error::{LoggerError, Result};
pub use format::RecordFormat;
pub use logger::{get_logger, Logger, LoggerBuilder};
pub use payload::{Payload, Status};
pub use record::LogRecord;
pub use severity::Severity;
pub use timestamp::TimestampFormat;
pub use transport::Transport;
