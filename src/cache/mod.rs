//! Probe result cache.
//!
//! Results are memoized per normalized URL for a fixed TTL. The store is a
//! trait so the orchestrator can be handed any backend; [`MemoryCacheStore`]
//! is the in-process one. A lookup is a HIT only while `now < expires_at`.

mod clock;
mod memory;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{CACHE_HIT, CACHE_MISS};
use crate::probe::ProbeResult;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memory::MemoryCacheStore;

/// Outcome of a single cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup {
    Hit(ProbeResult),
    Miss,
}

impl CacheLookup {
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }
}

/// Whether a whole response was served from cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

impl CacheStatus {
    /// HIT only if both sides are HIT.
    pub fn combine(self, other: CacheStatus) -> CacheStatus {
        match (self, other) {
            (CacheStatus::Hit, CacheStatus::Hit) => CacheStatus::Hit,
            _ => CacheStatus::Miss,
        }
    }

    /// Value for the `X-Worker-Cache` response header.
    pub fn header_value(self) -> &'static str {
        match self {
            CacheStatus::Hit => CACHE_HIT,
            CacheStatus::Miss => CACHE_MISS,
        }
    }
}

/// Keyed storage for probe results with per-entry expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// The stored result for `key`, if it has not expired.
    async fn get(&self, key: &str) -> CacheLookup;

    /// Stores or replaces the result for `key`, expiring `ttl` from now.
    async fn put(&self, key: &str, value: ProbeResult, ttl: Duration);

    /// Drops expired entries and returns how many were removed.
    async fn purge_expired(&self) -> usize;

    /// Number of stored entries, expired ones included until purged.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
