//! File transport for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL format),
//! compatible with log aggregation tools like ELK, Loki, etc.
//! No rotation; the file only ever grows.

use crate::core::{LogRecord, RecordFormat, Result, TimestampFormat, Transport};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct FileTransport {
    writer: BufWriter<File>,
    timestamp_format: TimestampFormat,
}

impl FileTransport {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Set the timestamp format for this transport
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Transport for FileTransport {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let line = RecordFormat::Json.render(record, &self.timestamp_format)?;
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Payload, Severity};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_transport_writes_jsonl() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let mut transport = FileTransport::new(&log_path)?;

        for i in 0..5 {
            let record = LogRecord::new(
                Severity::Info,
                "orders",
                "non-prod",
                format!("order {}", i),
                Payload::new().with_attached_object(format!("order-{}", i)),
            );
            transport.write(&record)?;
        }
        transport.flush()?;

        let content = fs::read_to_string(&log_path)?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        // Each line must be a valid canonical record
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert_eq!(parsed["component"], "orders");
            assert_eq!(parsed["severity"], "INFO");
            assert!(parsed["timestamp"].is_string());
            assert!(parsed["data"]["attachedObject"].is_string());
        }

        Ok(())
    }
}
