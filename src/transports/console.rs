//! Console transport implementation

use crate::core::format::format_payload_fields;
use crate::core::{LogRecord, RecordFormat, Result, Severity, TimestampFormat, Transport};
use colored::Colorize;

pub struct ConsoleTransport {
    use_colors: bool,
    format: RecordFormat,
    timestamp_format: TimestampFormat,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            format: RecordFormat::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            format: RecordFormat::default(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the record format for this transport
    ///
    /// # Example
    ///
    /// ```
    /// use service_log::transports::ConsoleTransport;
    /// use service_log::RecordFormat;
    ///
    /// let transport = ConsoleTransport::new().with_format(RecordFormat::Text);
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the timestamp format for this transport
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Text rendering with a colored severity tag. Apart from the color
    /// codes the line matches the plain text format, service and payload
    /// suffixes included.
    fn render_text_colored(&self, record: &LogRecord) -> String {
        let level_str = format!("{:5}", record.severity.to_str())
            .color(record.severity.color_code())
            .to_string();

        let mut base = format!(
            "[{}] [{}] {} - {}",
            self.timestamp_format.format(&record.timestamp),
            level_str,
            record.component,
            record.description
        );

        if let Some(ref service_name) = record.service_name {
            base = format!("{} service={}", base, service_name);
        }

        if !record.data.is_empty() {
            base = format!("{} {}", base, format_payload_fields(record));
        }

        base
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn write(&mut self, record: &LogRecord) -> Result<()> {
        let output = match self.format {
            RecordFormat::Text if self.use_colors => self.render_text_colored(record),
            _ => self.format.render(record, &self.timestamp_format)?,
        };

        // Error severity goes to stderr, the rest to stdout
        match record.severity {
            Severity::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since records are routed to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Payload, Status};

    fn full_record() -> LogRecord {
        LogRecord::new(
            Severity::Error,
            "auth",
            "non-prod",
            "login failed",
            Payload::new().with_error("bad password").with_status(Status::Fail),
        )
        .with_service_name("accounts")
    }

    #[test]
    fn test_colored_text_keeps_service_and_payload_fields() {
        let transport = ConsoleTransport::new().with_format(RecordFormat::Text);
        let line = transport.render_text_colored(&full_record());

        assert!(line.contains("auth - login failed"));
        assert!(line.contains("service=accounts"));
        assert!(line.contains("error=bad password"));
        assert!(line.contains("status=FAIL"));
    }

    #[test]
    fn test_colored_text_matches_plain_text_modulo_color_codes() {
        let record = full_record();
        let transport = ConsoleTransport::new().with_format(RecordFormat::Text);

        let colored_line = transport.render_text_colored(&record);
        let plain_line = RecordFormat::Text
            .render(&record, &TimestampFormat::Iso8601)
            .unwrap();

        // Strip ANSI escape sequences; what remains must be the plain line
        let stripped: String = {
            let mut out = String::new();
            let mut in_escape = false;
            for ch in colored_line.chars() {
                match ch {
                    '\x1b' => in_escape = true,
                    'm' if in_escape => in_escape = false,
                    _ if in_escape => {}
                    _ => out.push(ch),
                }
            }
            out
        };
        assert_eq!(stripped, plain_line);
    }
}
