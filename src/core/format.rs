//! Record rendering formats
//!
//! Provides the output formats a transport can render records with:
//! - Json: one JSON object per line, the canonical record contract (default)
//! - Text: human-readable single line for local development

use super::error::Result;
use super::record::LogRecord;
use super::timestamp::TimestampFormat;

/// Output format for rendered log records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// Machine-readable JSON, the canonical record shape
    ///
    /// Example: `{"timestamp":"2025-01-08T10:30:45.123Z","service_name":"billing","component":"auth","severity":"INFO","environment":"non-prod","description":"login accepted","data":{}}`
    #[default]
    Json,

    /// Human-readable single line
    ///
    /// Example: `[2025-01-08T10:30:45.123Z] [INFO ] auth - login accepted`
    Text,
}

impl RecordFormat {
    /// Render a record to a single line according to this format.
    pub fn render(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> Result<String> {
        match self {
            RecordFormat::Json => self.render_json(record, timestamp_format),
            RecordFormat::Text => Ok(self.render_text(record, timestamp_format)),
        }
    }

    fn render_json(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> Result<String> {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "timestamp".to_string(),
            serde_json::Value::String(timestamp_format.format(&record.timestamp)),
        );

        if let Some(ref service_name) = record.service_name {
            json_obj.insert(
                "service_name".to_string(),
                serde_json::Value::String(service_name.clone()),
            );
        }

        json_obj.insert(
            "component".to_string(),
            serde_json::Value::String(record.component.clone()),
        );
        json_obj.insert(
            "severity".to_string(),
            serde_json::Value::String(record.severity.to_str().to_string()),
        );
        json_obj.insert(
            "environment".to_string(),
            serde_json::Value::String(record.environment.clone()),
        );
        json_obj.insert(
            "description".to_string(),
            serde_json::Value::String(record.description.clone()),
        );
        json_obj.insert("data".to_string(), serde_json::to_value(&record.data)?);

        Ok(serde_json::to_string(&serde_json::Value::Object(json_obj))?)
    }

    fn render_text(&self, record: &LogRecord, timestamp_format: &TimestampFormat) -> String {
        let timestamp_str = timestamp_format.format(&record.timestamp);

        let mut base = format!(
            "[{}] [{:5}] {} - {}",
            timestamp_str,
            record.severity.to_str(),
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

/// Format payload fields as key=value pairs for the text format.
pub(crate) fn format_payload_fields(record: &LogRecord) -> String {
    let value = serde_json::to_value(&record.data).unwrap_or_default();
    let Some(map) = value.as_object() else {
        return String::new();
    };

    map.iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
