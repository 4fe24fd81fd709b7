use crate::config::Config;
use crate::form::{HttpMeetingApi, MeetingApi};
use crate::proxy::{Backend, HttpBackend};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Shared application state for HTTP handlers
///
/// Holds only the outbound clients; nothing request-scoped is kept here.
#[derive(Clone)]
pub struct AppState {
    /// Where the proxy route forwards to
    pub backend: Arc<dyn Backend>,

    /// Where the form submits to
    pub meetings: Arc<dyn MeetingApi>,

    /// Target of the "connect" link
    pub auth_url: Arc<str>,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn Backend>,
        meetings: Arc<dyn MeetingApi>,
        auth_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            backend,
            meetings,
            auth_url: auth_url.into(),
        }
    }

    /// Build HTTP clients for the configured backend and proxy URLs
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let backend = HttpBackend::new(cfg.backend.url.clone(), cfg.backend_timeout())?;
        let meetings = HttpMeetingApi::new(cfg.proxy_url()?, cfg.form_timeout())?;

        info!("Proxy forwards to {}", backend.url());
        info!("Form submits to {}", meetings.url());

        Ok(Self::new(
            Arc::new(backend),
            Arc::new(meetings),
            cfg.form.auth_url.as_str(),
        ))
    }
}
