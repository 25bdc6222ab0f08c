//! Probe orchestration.
//!
//! Sequences one request: normalize, check the host through the cache, and
//! only when the host is DOWN and the bare domain differs, check the domain
//! the same way. Each cache step is independent; nothing is locked across
//! the two.

#[cfg(test)]
pub(crate) mod fake;

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::cache::{CacheLookup, CacheStatus, CacheStore};
use crate::error_handling::{ApiError, EventType, ServiceStats};
use crate::normalize::{normalize, NormalizedTarget};
use crate::probe::{ProbeResponse, ProbeResult, ProbeTarget, Prober};

/// The answer to one request plus how it was served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub response: ProbeResponse,
    /// HIT only if every lookup in the flow hit
    pub cache_status: CacheStatus,
}

/// Runs the host-then-domain check for a requested URL.
#[derive(Clone)]
pub struct ProbeOrchestrator {
    prober: Arc<dyn Prober>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
    stats: Arc<ServiceStats>,
}

impl ProbeOrchestrator {
    pub fn new(prober: Arc<dyn Prober>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self {
            prober,
            cache,
            ttl,
            stats: Arc::new(ServiceStats::new()),
        }
    }

    /// Share a statistics tracker with the rest of the service.
    pub fn with_stats(mut self, stats: Arc<ServiceStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn stats(&self) -> &Arc<ServiceStats> {
        &self.stats
    }

    pub fn cache(&self) -> &Arc<dyn CacheStore> {
        &self.cache
    }

    /// Normalizes `raw` and checks it.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if the URL cannot be normalized. Probe
    /// outcomes are never errors.
    pub async fn handle(&self, raw: &str) -> Result<ProbeOutcome, ApiError> {
        let target = normalize(raw)?;
        Ok(self.check(&target).await)
    }

    /// Checks an already normalized target.
    pub async fn check(&self, target: &NormalizedTarget) -> ProbeOutcome {
        let (host_result, mut cache_status) = self.check_target(&target.host).await;
        let mut results = Vec::with_capacity(2);
        let host_down = !host_result.is_up();
        results.push(host_result);

        if host_down && target.has_distinct_domain() {
            let (domain_result, domain_status) = self.check_target(&target.domain).await;
            cache_status = cache_status.combine(domain_status);
            results.push(domain_result);
        }

        ProbeOutcome {
            response: ProbeResponse {
                requested_url: target.host.as_str().to_string(),
                results,
            },
            cache_status,
        }
    }

    /// Cache-or-probe for a single target.
    async fn check_target(&self, target: &ProbeTarget) -> (ProbeResult, CacheStatus) {
        let key = target.as_str();
        if let CacheLookup::Hit(cached) = self.cache.get(key).await {
            debug!("Cache HIT for {} check {}", target.kind, key);
            self.stats.increment(EventType::CacheHit);
            return (cached.with_kind(target.kind), CacheStatus::Hit);
        }

        debug!("Cache MISS for {} check {}", target.kind, key);
        self.stats.increment(EventType::CacheMiss);
        let result = self.prober.probe(target).await;
        self.stats.increment(if result.is_up() {
            EventType::ProbeUp
        } else {
            EventType::ProbeDown
        });
        self.cache.put(key, result.clone(), self.ttl).await;
        (result, CacheStatus::Miss)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
