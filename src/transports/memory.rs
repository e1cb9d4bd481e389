//! In-memory transport buffering records for inspection
//!
//! Useful in test harnesses that need to assert on the exact records a
//! facade emitted without touching stdout or the filesystem.

use crate::core::{LogRecord, Result, Transport};
use parking_lot::Mutex;
use std::sync::Arc;

pub struct MemoryTransport {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the captured records; clones stay valid after the
    /// transport has been moved into a logger.
    pub fn records(&self) -> Arc<Mutex<Vec<LogRecord>>> {
        Arc::clone(&self.records)
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MemoryTransport {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Payload, Severity};

    #[test]
    fn test_memory_transport_captures_records() {
        let mut transport = MemoryTransport::new();
        let records = transport.records();

        let record = LogRecord::new(
            Severity::Debug,
            "cache",
            "non-prod",
            "cache miss",
            Payload::new(),
        );
        transport.write(&record).unwrap();

        let captured = records.lock();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].description, "cache miss");
    }
}
