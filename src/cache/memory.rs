//! In-process cache store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::warn;

use super::clock::{Clock, SystemClock};
use super::{CacheLookup, CacheStore};
use crate::probe::ProbeResult;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: ProbeResult,
    /// `None` when `now + ttl` does not fit in an `Instant`; such an entry never expires.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_valid_at(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

/// Thread-safe map from normalized URL to probe result plus expiry.
///
/// Concurrent misses on the same key may both probe and both `put`; the
/// last write wins.
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCacheStore {
    /// Creates an empty store on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Cache read lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Cache write lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> CacheLookup {
        let now = self.clock.now();
        match self.read().get(key) {
            Some(entry) if entry.is_valid_at(now) => CacheLookup::Hit(entry.value.clone()),
            _ => CacheLookup::Miss,
        }
    }

    async fn put(&self, key: &str, value: ProbeResult, ttl: Duration) {
        let expires_at = self.clock.now().checked_add(ttl);
        self.write()
            .insert(key.to_string(), CacheEntry { value, expires_at });
    }

    async fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_valid_at(now));
        before - entries.len()
    }

    async fn len(&self) -> usize {
        self.read().len()
    }
}
