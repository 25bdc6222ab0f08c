//! Service lifecycle helpers.
//!
//! This module provides the background cache sweeper, shutdown signal
//! handling and the final statistics summary used by the server entry point.

pub mod logging;
pub mod shutdown;
pub mod sweeper;

// Re-export public API
pub use logging::log_service_stats;
pub use shutdown::{shutdown_gracefully, shutdown_signal};
pub use sweeper::spawn_cache_sweeper;
