use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Backend reply, relayed to the caller without modification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub status: StatusCode,

    /// Backend's Content-Type, if it sent one
    pub content_type: Option<HeaderValue>,

    pub body: Bytes,
}

/// Service that actually creates meetings with the provider
///
/// Implementations:
/// - [`HttpBackend`]: POSTs to the configured backend URL
/// - test doubles returning canned replies
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Send `body` to the backend once and return its reply
    ///
    /// Any HTTP status counts as a reply. Errors mean the backend could not
    /// be reached or its body could not be read.
    async fn forward(&self, body: Bytes) -> Result<Relay>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Backend reached over HTTP
pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpBackend {
    /// `timeout` bounds the whole exchange, connect through body read
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build backend HTTP client")?;

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
impl Backend for HttpBackend {
    async fn forward(&self, body: Bytes) -> Result<Relay> {
        debug!("POST {} ({} bytes)", self.url, body.len());

        let response = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        Ok(Relay {
            status,
            content_type,
            body,
        })
    }

    fn name(&self) -> &str {
        &self.url
    }
}
