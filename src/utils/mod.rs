//! Utility functions.
//!
//! This module provides:
//! - String sanitization for diagnostics returned to callers
//! - Duration helpers for log output

pub mod sanitize;
mod timing;

pub use timing::duration_to_ms;
