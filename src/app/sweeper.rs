//! Background removal of expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::cache::CacheStore;

/// Spawns a task that purges expired entries every `interval` until `cancel` fires.
pub fn spawn_cache_sweeper(
    cache: Arc<dyn CacheStore>,
    interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let removed = cache.purge_expired().await;
                    if removed > 0 {
                        debug!("Cache sweep removed {} expired entries", removed);
                    }
                }
            }
        }
        debug!("Cache sweeper stopped");
    })
}
