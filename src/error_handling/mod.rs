//! Error handling and service statistics.
//!
//! This module provides:
//! - Error type definitions (initialization and request errors)
//! - Categorization of network-level probe failures
//! - Service statistics tracking (requests, cache lookups, probe outcomes)
//!
//! Request errors are reserved for structurally invalid input. A probe that
//! cannot reach its target is not an error: it produces a DOWN result.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_probe_error, error_chain};
pub use stats::ServiceStats;
pub use types::{ApiError, EventType, InitializationError, ProbeFailure};
