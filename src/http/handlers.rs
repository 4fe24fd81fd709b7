use super::page::IndexPage;
use super::state::AppState;
use crate::form::{MeetingFields, MeetingForm};
use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// Set to "success" by the provider authorization flow
    pub auth: Option<String>,
}

/// GET /
/// Render an empty form
pub async fn index(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let form = MeetingForm::for_page_load(query.auth.as_deref(), Utc::now());
    render(&form, &state.auth_url)
}

/// POST /
/// Submit the form through the proxy route and render the outcome
pub async fn submit(State(state): State<AppState>, Form(fields): Form<MeetingFields>) -> Response {
    info!("Creating meeting '{}'", fields.topic);

    let mut form = MeetingForm::with_fields(fields);
    form.submit(state.meetings.as_ref()).await;

    render(&form, &state.auth_url)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn render(form: &MeetingForm, auth_url: &str) -> Response {
    match IndexPage::new(form, auth_url).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
