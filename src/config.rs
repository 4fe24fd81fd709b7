use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Environment variables with this prefix override file values,
/// e.g. `MEETING_SCHEDULER__BACKEND__URL`
pub const ENV_PREFIX: &str = "MEETING_SCHEDULER";

/// Path of the proxy route, relative to the service root
pub const CREATE_MEETING_PATH: &str = "/api/create-meeting";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub backend: BackendConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Where the proxy route forwards meeting requests
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    /// Proxy endpoint the form posts to. Derived from `service.http` when unset.
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Provider authorization endpoint behind the "connect" link
    pub auth_url: String,

    pub timeout_secs: u64,
}

impl Config {
    /// Load defaults, then the optional file at `path`, then environment overrides
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "meeting-scheduler")?
            .set_default("service.http.bind", "127.0.0.1")?
            .set_default("service.http.port", 3000)?
            .set_default("backend.url", "http://localhost:8080/api/create-meeting")?
            .set_default("backend.timeout_secs", 30)?
            .set_default("form.auth_url", "/api/zoom/auth")?
            .set_default("form.timeout_secs", 30)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Address the HTTP server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .service
            .http
            .bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.service.http.bind))?;

        Ok(SocketAddr::new(ip, self.service.http.port))
    }

    /// URL the form submits meeting requests to
    ///
    /// An unspecified bind address (0.0.0.0 or ::) is reached through loopback.
    pub fn proxy_url(&self) -> Result<String> {
        if let Some(url) = &self.form.proxy_url {
            return Ok(url.clone());
        }

        let mut addr = self.socket_addr()?;
        if addr.ip().is_unspecified() {
            addr.set_ip(IpAddr::V4(Ipv4Addr::LOCALHOST));
        }

        Ok(format!("http://{}{}", addr, CREATE_MEETING_PATH))
    }

    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }

    pub fn form_timeout(&self) -> Duration {
        Duration::from_secs(self.form.timeout_secs)
    }
}
