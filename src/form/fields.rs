use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Deserialize;

use crate::model::MeetingRequest;

pub const DEFAULT_DURATION: u32 = 60;
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Durations offered by the form, in minutes
pub const DURATION_CHOICES: [u32; 4] = [30, 60, 90, 120];

/// `datetime-local` input format
const INPUT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Form validation failures, detected before anything is sent
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("Start time is required")]
    MissingStartTime,

    #[error("Start time '{0}' is not a valid date and time")]
    InvalidStartTime(String),

    #[error("Duration '{0}' is not a whole number of minutes")]
    InvalidDuration(String),

    #[error("A meeting is already being created")]
    AlreadySubmitting,
}

/// Field values as entered by the user
///
/// Kept as raw text so a rejected submission re-renders exactly what was typed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeetingFields {
    #[serde(default)]
    pub topic: String,

    /// `datetime-local` value, e.g. "2026-10-20T09:30"
    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub timezone: String,

    #[serde(default)]
    pub password: String,
}

impl MeetingFields {
    /// Empty topic and password, start time `now`, 60 minutes in UTC
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            topic: String::new(),
            start_time: now.format(INPUT_TIME_FORMAT).to_string(),
            duration: DEFAULT_DURATION.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            password: String::new(),
        }
    }

    /// Validate the fields and build the wire request
    ///
    /// A blank timezone falls back to UTC; topic and password are sent as entered.
    pub fn to_request(&self) -> Result<MeetingRequest, FormError> {
        if self.topic.trim().is_empty() {
            return Err(FormError::MissingTopic);
        }

        let start_time = parse_start_time(&self.start_time)?;

        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidDuration(self.duration.clone()))?;

        let timezone = match self.timezone.trim() {
            "" => DEFAULT_TIMEZONE.to_string(),
            tz => tz.to_string(),
        };

        Ok(MeetingRequest {
            topic: self.topic.clone(),
            start_time: start_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            duration,
            timezone,
            password: self.password.clone(),
        })
    }
}

/// Parse a start time from the form
///
/// Accepts RFC 3339, or a `datetime-local` value with or without seconds.
/// Wall-clock values without an offset are read as UTC.
pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::MissingStartTime);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, INPUT_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map(|naive| naive.and_utc())
        .map_err(|_| FormError::InvalidStartTime(value.to_string()))
}
