//! Meeting form
//!
//! Holds the field values and submit status for one page render and runs
//! the submit cycle against a [`MeetingApi`]:
//! - validation failures never leave the form
//! - success resets every field to its default
//! - any failure keeps the fields as entered

mod client;
mod fields;
mod status;

pub use client::{HttpMeetingApi, MeetingApi, ProxyReply};
pub use fields::{
    parse_start_time, FormError, MeetingFields, DEFAULT_DURATION, DEFAULT_TIMEZONE,
    DURATION_CHOICES,
};
pub use status::FormStatus;

use anyhow::Result;
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::model::{ErrorResponse, MeetingRequest, MeetingResponse};

/// Query value set by the authorization flow on its way back
pub const AUTH_SUCCESS: &str = "success";

pub const AUTH_SUCCESS_NOTICE: &str =
    "Successfully connected your Zoom account. You can now create meetings.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingForm {
    fields: MeetingFields,
    status: FormStatus,
}

impl MeetingForm {
    /// Fresh form with default field values
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_fields(MeetingFields::defaults(now))
    }

    /// Form holding values submitted by the user
    pub fn with_fields(fields: MeetingFields) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    /// Fresh form for an initial page load
    ///
    /// `auth` is the `auth` query parameter; only `success` shows the notice.
    pub fn for_page_load(auth: Option<&str>, now: DateTime<Utc>) -> Self {
        let mut form = Self::new(now);
        if auth == Some(AUTH_SUCCESS) {
            form.status = FormStatus::Notice(AUTH_SUCCESS_NOTICE.to_string());
        }
        form
    }

    pub fn fields(&self) -> &MeetingFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn message(&self) -> Option<&str> {
        self.status.message()
    }

    /// Start a submission
    ///
    /// On success the form is [`FormStatus::Submitting`] and the returned
    /// request must be sent, then passed back through [`Self::complete`].
    /// On validation failure the form is [`FormStatus::Failed`] and nothing
    /// should be sent. A form that is already submitting is left untouched.
    pub fn begin_submit(&mut self) -> Result<MeetingRequest, FormError> {
        if self.is_loading() {
            return Err(FormError::AlreadySubmitting);
        }

        match self.fields.to_request() {
            Ok(request) => {
                self.status = FormStatus::Submitting;
                Ok(request)
            }
            Err(e) => {
                warn!("Meeting form rejected: {}", e);
                self.status = FormStatus::Failed(failure_message(&e.to_string()));
                Err(e)
            }
        }
    }

    /// Resolve a submission started with [`Self::begin_submit`]
    ///
    /// `now` becomes the start time when the fields are reset.
    pub fn complete(&mut self, outcome: Result<ProxyReply>, now: DateTime<Utc>) {
        self.status = match outcome {
            Ok(reply) if reply.status.is_success() => {
                match serde_json::from_slice::<MeetingResponse>(&reply.body) {
                    Ok(meeting) => {
                        info!("Meeting {} created: {}", meeting.id, meeting.join_url);
                        self.fields = MeetingFields::defaults(now);
                        FormStatus::Succeeded(format!(
                            "Meeting created successfully! Join URL: {}",
                            meeting.join_url
                        ))
                    }
                    Err(e) => unexpected(&e),
                }
            }
            Ok(reply) => match serde_json::from_slice::<ErrorResponse>(&reply.body) {
                Ok(error) => {
                    warn!("Meeting creation failed with {}: {:?}", reply.status, error);
                    FormStatus::Failed(rejection_message(&error, reply.status))
                }
                Err(e) => unexpected(&e),
            },
            Err(e) => unexpected(&format!("{:#}", e)),
        };
    }

    /// Run a full submission against `api`
    ///
    /// Exactly one call is made for valid fields and none otherwise.
    pub async fn submit(&mut self, api: &dyn MeetingApi) {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(_) => return,
        };

        let outcome = api.create_meeting(&request).await;
        self.complete(outcome, Utc::now());
    }
}

fn failure_message(reason: &str) -> String {
    format!("Failed to create meeting: {}", reason)
}

/// Message for a non-2xx reply; falls back to the reason phrase when the
/// body carries no error text
fn rejection_message(error: &ErrorResponse, status: StatusCode) -> String {
    let reason = if error.error.is_empty() {
        status.canonical_reason().unwrap_or("Unknown error")
    } else {
        error.error.as_str()
    };

    match &error.details {
        Some(details) => failure_message(&format!("{} - {}", reason, details)),
        None => failure_message(reason),
    }
}

fn unexpected(e: &dyn std::fmt::Display) -> FormStatus {
    warn!("Unexpected error creating meeting: {}", e);
    FormStatus::Failed(format!("An unexpected error occurred: {}", e))
}
