//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for command-line
//! and environment parsing. Every option can also be set through an
//! environment variable, which is how the service is normally deployed.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_CACHE_SWEEP_INTERVAL_SECS, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_PORT, DEFAULT_PROBE_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// HTTP method policy for outbound probes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProbeMethod {
    /// A single GET request (default)
    Get,
    /// A single HEAD request
    Head,
    /// HEAD first; one GET only if the target answers HEAD with 405 or 501
    HeadThenGet,
}

/// Service configuration.
///
/// Parsed from command-line flags and environment variables by the binary,
/// or constructed programmatically by library users and tests.
///
/// # Examples
///
/// ```no_run
/// use up_down::Config;
///
/// let config = Config {
///     api_key: "secret".to_string(),
///     cache_ttl_seconds: 60,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "up_down",
    version,
    about = "Reports whether a website is up, falling back to its bare domain"
)]
pub struct Config {
    /// API key callers must present in the `x-api-key` header
    #[arg(
        long,
        env = "API_KEY",
        hide_env_values = true,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub api_key: String,

    /// Seconds a probe result stays servable from the cache
    #[arg(long, env = "CACHE_TTL_SECONDS", default_value_t = DEFAULT_CACHE_TTL_SECS)]
    pub cache_ttl_seconds: u64,

    /// Seconds between sweeps that evict expired cache entries (0 disables)
    #[arg(
        long,
        env = "CACHE_SWEEP_INTERVAL_SECONDS",
        default_value_t = DEFAULT_CACHE_SWEEP_INTERVAL_SECS
    )]
    pub cache_sweep_interval_seconds: u64,

    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Per-probe timeout in seconds
    #[arg(long, env = "PROBE_TIMEOUT_SECONDS", default_value_t = DEFAULT_PROBE_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP method used by outbound probes
    #[arg(long, env = "PROBE_METHOD", value_enum, default_value_t = ProbeMethod::Get)]
    pub probe_method: ProbeMethod,

    /// User-Agent header sent with outbound probes
    #[arg(long, env = "PROBE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Per-probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Sweep interval, or `None` when the sweeper is disabled.
    pub fn cache_sweep_interval(&self) -> Option<Duration> {
        (self.cache_sweep_interval_seconds > 0)
            .then(|| Duration::from_secs(self.cache_sweep_interval_seconds))
    }

    /// Socket address the server listens on.
    ///
    /// # Errors
    ///
    /// Returns an error if `bind` and `port` do not form a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
            cache_sweep_interval_seconds: DEFAULT_CACHE_SWEEP_INTERVAL_SECS,
            bind: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_PROBE_TIMEOUT_SECS,
            probe_method: ProbeMethod::Get,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
