//! API key check.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::debug;

use super::AppState;
use crate::config::HEADER_API_KEY;
use crate::error_handling::{ApiError, EventType};

/// Rejects requests whose `x-api-key` header is missing or wrong.
pub(super) async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let supplied = request
        .headers()
        .get(HEADER_API_KEY)
        .and_then(|value| value.to_str().ok());

    if supplied == Some(&*state.api_key) {
        return next.run(request).await;
    }

    debug!(
        "Rejected {} {}: {} API key",
        request.method(),
        request.uri().path(),
        if supplied.is_some() { "wrong" } else { "missing" }
    );
    state.stats().increment(EventType::RequestRejected);
    ApiError::Unauthorized.into_response()
}
