//! Same-origin proxy route
//!
//! `POST /api/create-meeting` forwards the request body untouched to the
//! configured backend and relays the backend's status and body back:
//! - any backend status is relayed as-is
//! - transport failures become `500 {"error": "Failed to create meeting", "details": ...}`
//! - other methods get `405` with `Allow: POST`

mod backend;
mod handlers;

pub use backend::{Backend, HttpBackend, Relay};

use crate::config::CREATE_MEETING_PATH;
use crate::http::AppState;
use axum::{routing::post, Router};

/// Router holding the proxy route
pub fn router() -> Router<AppState> {
    Router::new().route(
        CREATE_MEETING_PATH,
        post(handlers::create_meeting).fallback(handlers::method_not_allowed),
    )
}
