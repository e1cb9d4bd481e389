//! Transport trait for log record destinations
//!
//! Transports play the role of the underlying logging library: they own
//! rendering and delivery of records the facade hands them. Delivery
//! reliability is entirely the transport's concern.

use super::{error::Result, record::LogRecord};

pub trait Transport: Send + Sync {
    fn write(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
