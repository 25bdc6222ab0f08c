//! Response construction.

use std::time::Duration;

use axum::http::header::CACHE_CONTROL;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::config::HEADER_WORKER_CACHE;
use crate::error_handling::ApiError;
use crate::orchestrator::ProbeOutcome;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidUrl(_) | ApiError::MissingUrl | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// 200 response for a completed check, with the cache headers.
pub(super) fn probe_response(outcome: ProbeOutcome, ttl: Duration) -> Response {
    let cache_control = format!("max-age={}", ttl.as_secs());
    let mut response = Json(outcome.response).into_response();
    let headers = response.headers_mut();
    headers.insert(
        HeaderName::from_static(HEADER_WORKER_CACHE),
        HeaderValue::from_static(outcome.cache_status.header_value()),
    );
    if let Ok(value) = HeaderValue::from_str(&cache_control) {
        headers.insert(CACHE_CONTROL, value);
    }
    response
}
