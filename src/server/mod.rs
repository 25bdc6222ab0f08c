//! HTTP surface.
//!
//! Routes:
//! - `GET /?url=<raw>` and `POST /` with `{"url": "<raw>"}` - run a check (API key required)
//! - any other method on `/`, HEAD included - 405 (after the API key check)
//! - `GET /metrics` - Prometheus text exposition, unauthenticated

mod auth;
mod handlers;
mod response;

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::cache::CacheStore;
use crate::error_handling::ServiceStats;
use crate::orchestrator::ProbeOrchestrator;

use auth::require_api_key;
use handlers::{method_not_allowed, metrics_handler, probe_get, probe_post};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: ProbeOrchestrator,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(orchestrator: ProbeOrchestrator, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            orchestrator,
            api_key: api_key.into(),
        }
    }

    pub fn stats(&self) -> &Arc<ServiceStats> {
        self.orchestrator.stats()
    }

    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        self.orchestrator.cache()
    }

    pub fn ttl(&self) -> Duration {
        self.orchestrator.ttl()
    }
}

/// Builds the service router.
pub fn build_router(state: AppState) -> Router {
    let probe_routes = Router::new()
        .route(
            "/",
            get(probe_get)
                .post(probe_post)
                // axum would otherwise answer HEAD with the GET handler
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/metrics", get(metrics_handler))
        .merge(probe_routes)
        .with_state(state)
}
