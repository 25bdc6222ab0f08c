//! Statistics logging.

use log::info;

use crate::error_handling::{EventType, ServiceStats};

/// Logs a one-line summary of the service counters.
pub fn log_service_stats(stats: &ServiceStats) {
    let served = stats.get(EventType::RequestServed);
    let hits = stats.get(EventType::CacheHit);
    let misses = stats.get(EventType::CacheMiss);
    let lookups = hits + misses;
    let hit_rate = if lookups > 0 {
        hits as f64 / lookups as f64 * 100.0
    } else {
        0.0
    };
    info!(
        "Served {} requests ({} rejected); cache {} hits / {} misses ({:.1}% hit rate); probes {} up / {} down",
        served,
        stats.get(EventType::RequestRejected),
        hits,
        misses,
        hit_rate,
        stats.get(EventType::ProbeUp),
        stats.get(EventType::ProbeDown)
    );
}
