//! HTTP server for the meeting form
//!
//! Routes:
//! - GET / - Render the form (`?auth=success` shows the connect notice)
//! - POST / - Submit the form and render the outcome
//! - POST /api/create-meeting - Proxy to the meeting backend
//! - GET /health - Health check

mod handlers;
mod page;
mod routes;
mod state;

pub use page::IndexPage;
pub use routes::create_router;
pub use state::AppState;
