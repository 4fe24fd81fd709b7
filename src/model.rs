//! Wire types exchanged between the form, the proxy route and the backend.
//!
//! None of these are persisted. The proxy never deserializes them; they
//! exist for the form side, which builds a [`MeetingRequest`] and reads
//! back either a [`MeetingResponse`] or an [`ErrorResponse`].

use serde::{Deserialize, Serialize};

/// Error message used whenever the proxy cannot reach the backend
pub const CREATE_FAILED: &str = "Failed to create meeting";

/// Meeting parameters sent from the form through the proxy to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub topic: String,

    /// RFC 3339 timestamp, e.g. "2026-10-20T09:30:00Z"
    pub start_time: String,

    /// Length in minutes
    pub duration: u32,

    /// IANA zone name or any identifier the provider accepts
    pub timezone: String,

    /// May be empty
    pub password: String,
}

/// Meeting record returned by the backend on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingResponse {
    pub id: u64,
    pub uuid: String,
    pub host_id: String,
    pub join_url: String,
    pub start_url: String,
    pub topic: String,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
    pub created_at: String,

    // Provider-dependent fields, kept as raw JSON since providers disagree
    // on their types (Zoom sends `pmi` as a string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h323_password: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmi: Option<serde_json::Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_password: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

/// Error body returned by the backend, or by the proxy on transport failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message; empty when the sender omitted it
    #[serde(default)]
    pub error: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
