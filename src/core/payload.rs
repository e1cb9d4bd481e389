//! Free-form data payload attached to a single log call
//!
//! The payload travels inside the record's `data` field. The facade never
//! interprets it beyond the optional `service_name` override; all fields are
//! optional and absent fields are omitted from serialized output.

use serde::{Deserialize, Serialize};

/// Outcome marker carried inside a payload, not interpreted by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Success,
    Fail,
}

/// Structured data attached to a single log call.
///
/// Serialized field names follow the emitted record contract
/// (`fullMessage`, `attachedObject`, `objectDescription` keep their
/// camel-case wire spelling).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    #[serde(rename = "fullMessage", skip_serializing_if = "Option::is_none")]
    pub full_message: Option<String>,

    #[serde(rename = "attachedObject", skip_serializing_if = "Option::is_none")]
    pub attached_object: Option<String>,

    #[serde(rename = "objectDescription", skip_serializing_if = "Option::is_none")]
    pub object_description: Option<String>,

    /// Per-call override of the record's resolved service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl Payload {
    /// Create a new empty payload. Serializes as `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_full_message(mut self, message: impl Into<String>) -> Self {
        self.full_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_attached_object(mut self, object: impl Into<String>) -> Self {
        self.attached_object = Some(object.into());
        self
    }

    #[must_use]
    pub fn with_object_description(mut self, description: impl Into<String>) -> Self {
        self.object_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Check if the payload carries no fields
    pub fn is_empty(&self) -> bool {
        self.error.is_none()
            && self.status.is_none()
            && self.full_message.is_none()
            && self.attached_object.is_none()
            && self.object_description.is_none()
            && self.service_name.is_none()
    }
}
