// Shared test helpers for building the service against mock upstreams.
//
// Probed hostnames are public names like `sub.example.com`; `RoutedProber`
// sends each one to a local wiremock server instead, keeping the path and
// query, so the real HTTP prober runs end to end without touching the network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use url::Url;

use up_down::{
    build_router, AppState, Clock, HttpProber, MemoryCacheStore, ProbeOrchestrator, ProbeResult,
    ProbeTarget, Prober,
};

pub const API_KEY: &str = "integration-key";
pub const TTL: Duration = Duration::from_secs(600);

/// Prober that redirects named hosts to mock servers.
pub struct RoutedProber {
    inner: HttpProber,
    routes: HashMap<String, Url>,
    calls: AtomicUsize,
}

impl RoutedProber {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("Failed to build test client");
        Self {
            inner: HttpProber::new(Arc::new(client)).with_timeout(Duration::from_secs(2)),
            routes: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Sends probes for `host` to the server at `base`.
    pub fn route(mut self, host: &str, base: &str) -> Self {
        self.routes
            .insert(host.to_string(), Url::parse(base).expect("Invalid mock base URL"));
        self
    }

    #[allow(dead_code)] // Used by some test files
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for RoutedProber {
    async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let host = target.url.host_str().unwrap_or_default();
        let Some(base) = self.routes.get(host) else {
            return self.inner.probe(target).await;
        };

        let mut routed = base.clone();
        routed.set_path(target.url.path());
        routed.set_query(target.url.query());
        let mut result = self
            .inner
            .probe(&ProbeTarget::new(routed, target.kind))
            .await;
        result.url = target.as_str().to_string();
        result
    }
}

/// Builds the router around `prober` with an in-memory cache on `clock`.
pub fn service(prober: Arc<RoutedProber>, clock: Arc<dyn Clock>) -> Router {
    let orchestrator = ProbeOrchestrator::new(
        prober,
        Arc::new(MemoryCacheStore::with_clock(clock)),
        TTL,
    );
    build_router(AppState::new(orchestrator, API_KEY))
}

pub fn authed_get(query: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/?{}", query))
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .expect("Failed to build request")
}

#[allow(dead_code)] // Used by some test files
pub fn authed_post(json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("x-api-key", API_KEY)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .expect("Failed to build request")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub fn cache_header(response: &Response) -> String {
    response
        .headers()
        .get("x-worker-cache")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
