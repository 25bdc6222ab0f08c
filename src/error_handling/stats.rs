//! Service statistics tracking.
//!
//! Thread-safe counters for requests, cache lookups and probe outcomes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::EventType;

/// Thread-safe service statistics tracker.
///
/// Every [`EventType`] gets an atomic counter initialised to zero, so
/// increments from concurrent request tasks never contend on a lock. Share
/// it across tasks with `Arc`.
pub struct ServiceStats {
    events: HashMap<EventType, AtomicUsize>,
}

impl ServiceStats {
    pub fn new() -> Self {
        let mut events = HashMap::new();
        for event in EventType::iter() {
            events.insert(event, AtomicUsize::new(0));
        }
        ServiceStats { events }
    }

    /// Increment an event counter.
    pub fn increment(&self, event: EventType) {
        if let Some(counter) = self.events.get(&event) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ServiceStats initialization.",
                event
            );
        }
    }

    /// Current value of an event counter.
    pub fn get(&self, event: EventType) -> usize {
        self.events
            .get(&event)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Snapshot of all counters in declaration order.
    pub fn snapshot(&self) -> Vec<(EventType, usize)> {
        EventType::iter().map(|e| (e, self.get(e))).collect()
    }
}

impl Default for ServiceStats {
    fn default() -> Self {
        Self::new()
    }
}
