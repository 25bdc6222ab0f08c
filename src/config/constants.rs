//! Configuration constants.
//!
//! This module defines the constants used throughout the service, including
//! probe timeouts, cache lifetimes, size limits and the success-code range.

use std::ops::RangeInclusive;
use std::time::Duration;

// Cache
/// Default lifetime of a cached probe result in seconds (10 minutes)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
/// Default interval between sweeps that evict expired cache entries
pub const DEFAULT_CACHE_SWEEP_INTERVAL_SECS: u64 = 60;

// Probing
/// Default per-probe timeout in seconds.
/// A probe that has not completed after this long is reported as DOWN.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;
/// Same value as a `Duration`, used when no explicit timeout is configured
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS);
/// HTTP status codes that count as UP. Anything else is DOWN.
pub const SUCCESS_STATUS_CODES: RangeInclusive<u16> = 200..=399;
/// Maximum number of redirect hops a probe follows before giving up
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Status codes with which a target tells us it does not support HEAD
pub const HEAD_REJECTED_STATUS_CODES: &[u16] = &[405, 501];

/// Default User-Agent for outbound probes.
pub const DEFAULT_USER_AGENT: &str = concat!("up-down/", env!("CARGO_PKG_VERSION"));

// Server
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8787;

// Input and message size limits
/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;
/// Maximum diagnostic length placed in `status_text` (500 chars)
/// Longer messages are truncated with a note about the original length
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;
