//! Error type definitions.
//!
//! This module defines the error types used throughout the service and the
//! categories used to describe failed probes and service events.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error binding the listening socket.
    #[error("Listener initialization error: {0}")]
    ListenerError(#[from] std::io::Error),
}

/// Errors that reject a request before any probing happens.
///
/// Probe outcomes are never errors; an unreachable target is a successful
/// answer carrying a DOWN verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The supplied URL is empty, too long or syntactically malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No `url` query parameter or JSON field was supplied.
    #[error("Missing required `url` parameter")]
    MissingUrl,

    /// The request could not be decoded (e.g. malformed JSON body).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The HTTP method is neither GET nor POST.
    #[error("Method not allowed. Use GET or POST.")]
    MethodNotSupported,

    /// The `x-api-key` header is missing or wrong.
    #[error("Unauthorized")]
    Unauthorized,
}

/// Category of a network-level probe failure.
///
/// The label prefixes the diagnostic stored in `status_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ProbeFailure {
    /// The probe did not complete within its timeout
    Timeout,
    /// DNS resolution or TCP/TLS connection failed
    Connect,
    /// Too many redirects or a redirect loop
    Redirect,
    /// The request could not be sent (invalid URL for the client, etc.)
    Request,
    /// Reading the response failed
    Body,
    /// Anything else
    Other,
}

impl ProbeFailure {
    /// Short lowercase label used as the diagnostic prefix.
    pub fn label(self) -> &'static str {
        match self {
            ProbeFailure::Timeout => "timeout",
            ProbeFailure::Connect => "connection failed",
            ProbeFailure::Redirect => "redirect",
            ProbeFailure::Request => "request failed",
            ProbeFailure::Body => "response body",
            ProbeFailure::Other => "network error",
        }
    }
}

/// Service events counted by [`ServiceStats`](super::ServiceStats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum EventType {
    /// A probe request accepted and answered
    RequestServed,
    /// A request rejected with 4xx before probing
    RequestRejected,
    /// A cache lookup that returned a valid entry
    CacheHit,
    /// A cache lookup that found nothing valid
    CacheMiss,
    /// A live probe that returned UP
    ProbeUp,
    /// A live probe that returned DOWN
    ProbeDown,
}

impl EventType {
    /// Metric name suffix used in the Prometheus exposition.
    pub fn metric_name(self) -> &'static str {
        match self {
            EventType::RequestServed => "requests_served_total",
            EventType::RequestRejected => "requests_rejected_total",
            EventType::CacheHit => "cache_hits_total",
            EventType::CacheMiss => "cache_misses_total",
            EventType::ProbeUp => "probes_up_total",
            EventType::ProbeDown => "probes_down_total",
        }
    }
}
