use crate::http::AppState;
use crate::model::{ErrorResponse, CREATE_FAILED};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

/// POST /api/create-meeting
/// Forward the raw body to the backend and relay its reply
pub async fn create_meeting(State(state): State<AppState>, body: Bytes) -> Response {
    let backend = state.backend.as_ref();

    match backend.forward(body).await {
        Ok(relay) => {
            info!(
                "Backend {} answered {} ({} bytes)",
                backend.name(),
                relay.status,
                relay.body.len()
            );

            let content_type = relay
                .content_type
                .unwrap_or_else(|| HeaderValue::from_static("application/json"));

            (relay.status, [(header::CONTENT_TYPE, content_type)], relay.body)
                .into_response()
        }
        Err(e) => {
            error!("Error forwarding to backend {}: {:#}", backend.name(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(CREATE_FAILED).with_details(format!("{:#}", e))),
            )
                .into_response()
        }
    }
}

/// Any method other than POST on the proxy route
pub async fn method_not_allowed(method: Method) -> Response {
    warn!("Rejected {} on the create-meeting route", method);

    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}
