use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::http::StatusCode;
use std::time::Duration;

use crate::model::MeetingRequest;

/// Raw reply from the proxy route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Outbound call made by the form on submit
#[async_trait::async_trait]
pub trait MeetingApi: Send + Sync {
    /// POST `request` as JSON to the proxy route
    ///
    /// Any HTTP status is a reply; errors are transport failures only.
    async fn create_meeting(&self, request: &MeetingRequest) -> Result<ProxyReply>;
}

/// [`MeetingApi`] over HTTP
pub struct HttpMeetingApi {
    client: reqwest::Client,
    url: String,
}

impl HttpMeetingApi {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build proxy HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl MeetingApi for HttpMeetingApi {
    async fn create_meeting(&self, request: &MeetingRequest) -> Result<ProxyReply> {
        // `json` also sets Content-Type: application/json
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        let body = response.bytes().await?;

        Ok(ProxyReply { status, body })
    }
}
