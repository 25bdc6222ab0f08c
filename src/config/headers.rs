//! HTTP header names used at the service boundary.

/// Request header carrying the caller's API key
pub const HEADER_API_KEY: &str = "x-api-key";

/// Response header reporting whether every cache lookup for the request hit.
/// Value is `HIT` or `MISS`.
pub const HEADER_WORKER_CACHE: &str = "x-worker-cache";

/// Value of `X-Worker-Cache` when every lookup was served from the cache
pub const CACHE_HIT: &str = "HIT";
/// Value of `X-Worker-Cache` when at least one live probe was needed
pub const CACHE_MISS: &str = "MISS";
