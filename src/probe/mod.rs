//! Reachability probing.
//!
//! Provides the probe data model and the [`Prober`] seam:
//! - `ProbeTarget` / `ProbeKind`: what to check and at which tier
//! - `ProbeResult` / `ProbeStatus`: the classified outcome of one attempt
//! - `ProbeResponse`: the ordered results returned to callers
//! - `HttpProber`: the production prober built on `reqwest`
//!
//! Classification: a response with a status code in `200..=399` is UP, any
//! other status code is DOWN, and a request that never got a response (DNS
//! failure, refused connection, timeout, redirect loop) is DOWN with status
//! code 0 and a diagnostic.

mod prober;
mod types;

pub use prober::{HttpProber, Prober};
pub use types::{ProbeKind, ProbeResponse, ProbeResult, ProbeStatus, ProbeTarget};
