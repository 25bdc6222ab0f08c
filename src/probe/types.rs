//! Probe data model.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use url::Url;

/// Which tier of the check a target or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeKind {
    /// The exact requested URL, path and query included
    Host,
    /// The bare registrable domain, probed only when the host is DOWN
    Domain,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Host => f.write_str("host"),
            ProbeKind::Domain => f.write_str("domain"),
        }
    }
}

/// Reachability verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    Up,
    Down,
}

/// A URL to probe, derived fresh for each request by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub url: Url,
    pub kind: ProbeKind,
}

impl ProbeTarget {
    pub fn new(url: Url, kind: ProbeKind) -> Self {
        Self { url, kind }
    }

    /// The normalized URL string, also used as the cache key.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

/// Outcome of a single probe.
///
/// `status` is `Up` exactly when `status_code` falls in the prober's success
/// range. A probe that never got a response has `status_code == 0` and a
/// diagnostic in `status_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    #[serde(rename = "type")]
    pub kind: ProbeKind,
    pub url: String,
    pub status: ProbeStatus,
    pub status_code: u16,
    pub status_text: String,
}

impl ProbeResult {
    /// Result for a target that answered with an HTTP status code.
    pub fn from_status_code(
        target: &ProbeTarget,
        status_code: u16,
        success_codes: &RangeInclusive<u16>,
    ) -> Self {
        let status = if success_codes.contains(&status_code) {
            ProbeStatus::Up
        } else {
            ProbeStatus::Down
        };
        Self {
            kind: target.kind,
            url: target.as_str().to_string(),
            status,
            status_code,
            status_text: String::new(),
        }
    }

    /// Result for a target that could not be reached at all.
    pub fn unreachable(target: &ProbeTarget, diagnostic: impl Into<String>) -> Self {
        Self {
            kind: target.kind,
            url: target.as_str().to_string(),
            status: ProbeStatus::Down,
            status_code: 0,
            status_text: diagnostic.into(),
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == ProbeStatus::Up
    }

    /// Copy of this result relabelled for another tier.
    ///
    /// A URL cached as a host check may be reused as another request's domain
    /// check, and vice versa.
    pub fn with_kind(mut self, kind: ProbeKind) -> Self {
        self.kind = kind;
        self
    }
}

/// The body returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    /// The normalized host URL that was checked first
    pub requested_url: String,
    /// Host result, followed by the domain result when a fallback ran
    pub results: Vec<ProbeResult>,
}
