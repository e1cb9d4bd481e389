//! Canonical log record

use super::payload::Payload;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The canonical shape handed to every transport, one record per call.
///
/// Every record carries severity, component, description and data; timestamp
/// and environment are always present, and `service_name` is present when it
/// could be resolved from the payload override or the configured default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub component: String,
    pub severity: Severity,
    pub environment: String,
    pub description: String,
    pub data: Payload,
}

impl LogRecord {
    /// Sanitize the description to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so one call can never masquerade as multiple records.
    fn sanitize_description(description: &str) -> String {
        description
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        severity: Severity,
        component: impl Into<String>,
        environment: impl Into<String>,
        description: impl Into<String>,
        data: Payload,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            service_name: None,
            component: component.into(),
            severity,
            environment: environment.into(),
            description: Self::sanitize_description(&description.into()),
            data,
        }
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }
}
