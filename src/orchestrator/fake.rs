//! Scripted prober for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::SUCCESS_STATUS_CODES;
use crate::probe::{ProbeResult, ProbeTarget, Prober};

/// Answers from a fixed URL → status code table and counts calls per URL.
///
/// Unlisted URLs answer as unreachable. A code of 0 also means unreachable.
#[derive(Default)]
pub(crate) struct FakeProber {
    codes: HashMap<String, u16>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeProber {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, status_code: u16) -> Self {
        self.codes.insert(url.to_string(), status_code);
        self
    }

    pub(crate) fn calls(&self, url: &str) -> usize {
        self.lock().get(url).copied().unwrap_or(0)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.lock().values().sum()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, usize>> {
        self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Prober for FakeProber {
    async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        *self.lock().entry(target.as_str().to_string()).or_insert(0) += 1;
        match self.codes.get(target.as_str()) {
            Some(&code) if code != 0 => {
                ProbeResult::from_status_code(target, code, &SUCCESS_STATUS_CODES)
            }
            _ => ProbeResult::unreachable(target, "connection failed: dns error"),
        }
    }
}
