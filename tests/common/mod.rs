// Shared test doubles for the proxy backend and the form's meeting API

#![allow(dead_code)]

use anyhow::Result;
use axum::body::{Body, Bytes};
use axum::http::{HeaderValue, Response, StatusCode};
use meeting_scheduler::{AppState, Backend, MeetingApi, MeetingRequest, ProxyReply, Relay};
use std::sync::{Arc, Mutex};

pub const AUTH_URL: &str = "/api/zoom/auth";

/// Backend that returns a fixed reply and records every forwarded body
pub struct MockBackend {
    reply: std::result::Result<Relay, String>,
    pub bodies: Mutex<Vec<Bytes>>,
}

impl MockBackend {
    pub fn replying(status: StatusCode, body: impl Into<Bytes>) -> Arc<Self> {
        Self::replying_as(status, None, body)
    }

    pub fn replying_as(
        status: StatusCode,
        content_type: Option<&'static str>,
        body: impl Into<Bytes>,
    ) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(Relay {
                status,
                content_type: content_type.map(HeaderValue::from_static),
                body: body.into(),
            }),
            bodies: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error.to_string()),
            bodies: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    async fn forward(&self, body: Bytes) -> Result<Relay> {
        self.bodies.lock().unwrap().push(body);
        match &self.reply {
            Ok(relay) => Ok(relay.clone()),
            Err(e) => Err(anyhow::anyhow!(e.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Meeting API that returns a fixed reply and records every request
pub struct MockMeetingApi {
    reply: std::result::Result<ProxyReply, String>,
    pub requests: Mutex<Vec<MeetingRequest>>,
}

impl MockMeetingApi {
    pub fn replying(status: StatusCode, body: impl Into<Bytes>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(ProxyReply {
                status,
                body: body.into(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl MeetingApi for MockMeetingApi {
    async fn create_meeting(&self, request: &MeetingRequest) -> Result<ProxyReply> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(e) => Err(anyhow::anyhow!(e.clone())),
        }
    }
}

pub fn state(backend: Arc<dyn Backend>, meetings: Arc<dyn MeetingApi>) -> AppState {
    AppState::new(backend, meetings, AUTH_URL)
}

/// Backend success body for the given meeting
pub fn meeting_json(id: u64, join_url: &str) -> String {
    serde_json::json!({
        "id": id,
        "uuid": "abc",
        "host_id": "host-1",
        "join_url": join_url,
        "start_url": format!("{}?start=1", join_url),
        "topic": "Weekly sync",
        "start_time": "2026-10-20T09:30:00Z",
        "duration": 60,
        "timezone": "UTC",
        "created_at": "2026-10-17T12:00:00Z"
    })
    .to_string()
}

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).expect("utf-8 body")
}

/// A loopback address nothing is listening on
pub async fn unused_addr() -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Serve `app` on a random loopback port
pub async fn spawn_server(app: axum::Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    spawn_on(listener, app)
}

/// Serve `app` on an already bound listener
pub fn spawn_on(listener: tokio::net::TcpListener, app: axum::Router) -> std::net::SocketAddr {
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
