//! up_down library: authenticated website reachability checks
//!
//! This library answers "is this site up?" for a requested URL. It probes the
//! exact host URL first and, only when that is DOWN, falls back to the bare
//! registrable domain. Results are memoized per URL for a configurable TTL and
//! every response reports whether it was served entirely from cache.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use up_down::{HttpProber, MemoryCacheStore, ProbeOrchestrator};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(reqwest::Client::new());
//! let orchestrator = ProbeOrchestrator::new(
//!     Arc::new(HttpProber::new(client)),
//!     Arc::new(MemoryCacheStore::new()),
//!     Duration::from_secs(600),
//! );
//!
//! let outcome = orchestrator.handle("sub.example.com/page").await?;
//! for result in &outcome.response.results {
//!     println!("{} {} {:?}", result.kind, result.url, result.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod cache;
pub mod config;
mod domain;
pub mod error_handling;
pub mod initialization;
mod normalize;
mod orchestrator;
pub mod probe;
pub mod server;
mod utils;

// Re-export public API
pub use cache::{
    CacheLookup, CacheStatus, CacheStore, Clock, ManualClock, MemoryCacheStore, SystemClock,
};
pub use config::{Config, LogFormat, LogLevel, ProbeMethod};
pub use error_handling::{ApiError, EventType, InitializationError, ServiceStats};
pub use normalize::{normalize, NormalizedTarget};
pub use orchestrator::{ProbeOrchestrator, ProbeOutcome};
pub use probe::{
    HttpProber, ProbeKind, ProbeResponse, ProbeResult, ProbeStatus, ProbeTarget, Prober,
};
pub use run::run_server;
pub use server::{build_router, AppState};

// Internal run module (wires the service together and serves it)
mod run {
    use std::sync::Arc;

    use anyhow::{bail, Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{log_service_stats, shutdown_gracefully, shutdown_signal, spawn_cache_sweeper};
    use crate::cache::{CacheStore, MemoryCacheStore};
    use crate::config::Config;
    use crate::error_handling::{InitializationError, ServiceStats};
    use crate::orchestrator::ProbeOrchestrator;
    use crate::probe::HttpProber;
    use crate::server::{build_router, AppState};

    /// Runs the HTTP service until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the HTTP client
    /// cannot be built, the listener cannot bind, or the server fails.
    pub async fn run_server(config: Config) -> Result<()> {
        if config.api_key.is_empty() {
            bail!("API_KEY must be set to a non-empty value");
        }
        let addr = config
            .socket_addr()
            .with_context(|| format!("Invalid bind address {}:{}", config.bind, config.port))?;

        let prober = HttpProber::from_config(&config).context("Failed to initialize prober")?;
        let cache: Arc<dyn CacheStore> = Arc::new(MemoryCacheStore::new());
        let stats = Arc::new(ServiceStats::new());
        let orchestrator =
            ProbeOrchestrator::new(Arc::new(prober), Arc::clone(&cache), config.cache_ttl())
                .with_stats(Arc::clone(&stats));
        let router = build_router(AppState::new(orchestrator, config.api_key.as_str()));

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(InitializationError::from)
            .with_context(|| format!("Failed to bind {}", addr))?;

        let cancel = CancellationToken::new();
        let sweeper = config
            .cache_sweep_interval()
            .map(|interval| spawn_cache_sweeper(Arc::clone(&cache), interval, cancel.clone()));

        info!(
            "Listening on http://{} (cache TTL {}s, probe timeout {}s, method {:?})",
            addr, config.cache_ttl_seconds, config.timeout_seconds, config.probe_method
        );

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error");

        shutdown_gracefully(cancel, sweeper).await;
        log_service_stats(&stats);
        info!("Server stopped");
        served
    }
}
