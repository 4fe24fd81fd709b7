use super::handlers;
use super::state::AppState;
use crate::proxy;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Form page
        .route("/", get(handlers::index).post(handlers::submit))
        // Proxy to the meeting backend
        .merge(proxy::router())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
