//! Outbound HTTP prober.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Method, StatusCode};

use super::types::{ProbeResult, ProbeTarget};
use crate::config::{
    Config, ProbeMethod, DEFAULT_PROBE_TIMEOUT, HEAD_REJECTED_STATUS_CODES, SUCCESS_STATUS_CODES,
};
use crate::error_handling::{describe_probe_error, InitializationError};
use crate::initialization::init_client;
use crate::utils::duration_to_ms;

/// Checks whether a single URL is reachable.
///
/// Implementations never fail: every outcome, including DNS failures and
/// timeouts, is captured in the returned [`ProbeResult`]. One call is one
/// attempt; there are no retries.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, target: &ProbeTarget) -> ProbeResult;
}

/// [`Prober`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    method: ProbeMethod,
    timeout: Duration,
    success_codes: RangeInclusive<u16>,
}

impl HttpProber {
    /// Creates a prober that issues GET with the default timeout and success range.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self {
            client,
            method: ProbeMethod::Get,
            timeout: DEFAULT_PROBE_TIMEOUT,
            success_codes: SUCCESS_STATUS_CODES,
        }
    }

    /// Builds the HTTP client and the prober from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::new(client)
            .with_method(config.probe_method)
            .with_timeout(config.probe_timeout()))
    }

    pub fn with_method(mut self, method: ProbeMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the range of status codes that count as UP.
    pub fn with_success_codes(mut self, success_codes: RangeInclusive<u16>) -> Self {
        self.success_codes = success_codes;
        self
    }

    async fn send(&self, method: Method, target: &ProbeTarget) -> Result<StatusCode, reqwest::Error> {
        let response = self
            .client
            .request(method, target.url.clone())
            .timeout(self.timeout)
            .send()
            .await?;
        Ok(response.status())
    }

    /// Issues the request(s) dictated by the method policy.
    async fn fetch_status(&self, target: &ProbeTarget) -> Result<StatusCode, reqwest::Error> {
        match self.method {
            ProbeMethod::Get => self.send(Method::GET, target).await,
            ProbeMethod::Head => self.send(Method::HEAD, target).await,
            ProbeMethod::HeadThenGet => {
                let status = self.send(Method::HEAD, target).await?;
                if HEAD_REJECTED_STATUS_CODES.contains(&status.as_u16()) {
                    debug!("{} rejected HEAD with {}, retrying with GET", target.url, status);
                    self.send(Method::GET, target).await
                } else {
                    Ok(status)
                }
            }
        }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        let start = Instant::now();
        let result = match self.fetch_status(target).await {
            Ok(status) => {
                ProbeResult::from_status_code(target, status.as_u16(), &self.success_codes)
            }
            Err(e) => ProbeResult::unreachable(target, describe_probe_error(&e)),
        };
        let elapsed_ms = duration_to_ms(start.elapsed());

        if result.is_up() {
            debug!(
                "{} check {} is UP ({}) in {}ms",
                target.kind, target.url, result.status_code, elapsed_ms
            );
        } else {
            info!(
                "{} check {} is DOWN (code {}{}{}) in {}ms",
                target.kind,
                target.url,
                result.status_code,
                if result.status_text.is_empty() { "" } else { ", " },
                result.status_text,
                elapsed_ms
            );
        }
        result
    }
}
