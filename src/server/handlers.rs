//! Request handlers.

use std::fmt::Write as _;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::debug;
use serde::Deserialize;

use super::response::probe_response;
use super::AppState;
use crate::cache::CacheStore;
use crate::error_handling::{ApiError, EventType};

const METRICS_PREFIX: &str = "up_down";

/// The `url` parameter, from the query string or the JSON body.
#[derive(Debug, Default, Deserialize)]
pub(super) struct UrlParams {
    url: Option<String>,
}

/// `GET /?url=<raw>`
pub(super) async fn probe_get(
    State(state): State<AppState>,
    params: Result<Query<UrlParams>, QueryRejection>,
) -> Response {
    let params = params
        .map(|Query(params)| params)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()));
    run_check(&state, params).await
}

/// `POST /` with `{"url": "<raw>"}`
pub(super) async fn probe_post(
    State(state): State<AppState>,
    body: Result<Json<UrlParams>, JsonRejection>,
) -> Response {
    let params = body
        .map(|Json(params)| params)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()));
    run_check(&state, params).await
}

/// Any other method on `/`.
pub(super) async fn method_not_allowed(State(state): State<AppState>, method: Method) -> Response {
    debug!("Rejected unsupported method {}", method);
    state.stats().increment(EventType::RequestRejected);
    ApiError::MethodNotSupported.into_response()
}

async fn run_check(state: &AppState, params: Result<UrlParams, ApiError>) -> Response {
    let result = match params {
        Ok(UrlParams { url: Some(raw) }) if !raw.is_empty() => {
            debug!("Checking {}", raw);
            state.orchestrator.handle(&raw).await
        }
        Ok(_) => Err(ApiError::MissingUrl),
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => {
            state.stats().increment(EventType::RequestServed);
            probe_response(outcome, state.ttl())
        }
        Err(e) => {
            debug!("Rejected request: {}", e);
            state.stats().increment(EventType::RequestRejected);
            e.into_response()
        }
    }
}

/// `GET /metrics`
pub(super) async fn metrics_handler(State(state): State<AppState>) -> Response {
    let mut body = String::new();
    for (event, count) in state.stats().snapshot() {
        let name = format!("{}_{}", METRICS_PREFIX, event.metric_name());
        let _ = writeln!(body, "# TYPE {} counter", name);
        let _ = writeln!(body, "{} {}", name, count);
    }
    let entries = state.cache().len().await;
    let _ = writeln!(
        body,
        "# HELP {}_cache_entries Entries held by the cache, expired included",
        METRICS_PREFIX
    );
    let _ = writeln!(body, "# TYPE {}_cache_entries gauge", METRICS_PREFIX);
    let _ = writeln!(body, "{}_cache_entries {}", METRICS_PREFIX, entries);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
