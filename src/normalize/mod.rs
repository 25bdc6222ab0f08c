//! URL normalization.
//!
//! Turns the raw `url` value a caller supplied into the two probe targets:
//! the host URL (exactly what was asked for, in canonical form) and the
//! bare-domain URL used as the fallback.
//!
//! Repair policy:
//! - Surrounding whitespace is trimmed.
//! - A missing scheme defaults to `https://`.
//! - Only `http` and `https` are accepted.
//! - The fragment is dropped; it is never sent to a server.
//! - Userinfo is dropped and trailing dots on the host are removed.
//! - Everything else is left to the `url` crate's canonical form (lowercase
//!   scheme and host, punycode, `/` as the default path).
//!
//! Only syntactic problems are rejected here. Whether a host actually exists
//! is for the probe to find out.

use url::{Host, Url};

use crate::config::MAX_URL_LENGTH;
use crate::domain::domain_url;
use crate::error_handling::ApiError;
use crate::probe::{ProbeKind, ProbeTarget};

/// The host and domain targets derived from one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTarget {
    pub host: ProbeTarget,
    pub domain: ProbeTarget,
}

impl NormalizedTarget {
    /// Whether the domain fallback would check a different URL than the host check.
    pub fn has_distinct_domain(&self) -> bool {
        self.host.url != self.domain.url
    }
}

/// Normalizes a raw URL into its host and domain targets.
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` when the input is empty, too long, uses an
/// unsupported scheme, or cannot be parsed as a URL with a host.
///
/// # Examples
///
/// ```
/// use up_down::normalize;
///
/// let target = normalize("sub.example.com/page?x=1").unwrap();
/// assert_eq!(target.host.url.as_str(), "https://sub.example.com/page?x=1");
/// assert_eq!(target.domain.url.as_str(), "https://example.com/");
/// ```
pub fn normalize(raw: &str) -> Result<NormalizedTarget, ApiError> {
    let host_url = normalize_url(raw)?;
    let domain = domain_url(&host_url)
        .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", host_url, e)))?;

    Ok(NormalizedTarget {
        host: ProbeTarget::new(host_url, ProbeKind::Host),
        domain: ProbeTarget::new(domain, ProbeKind::Domain),
    })
}

/// Normalizes a raw URL into the canonical host URL.
///
/// # Errors
///
/// See [`normalize`].
pub fn normalize_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidUrl("URL is empty".to_string()));
    }
    check_length(trimmed)?;

    let with_scheme = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    // Adding the scheme can push an input over the limit
    check_length(&with_scheme)?;

    let mut parsed =
        Url::parse(&with_scheme).map_err(|e| ApiError::InvalidUrl(format!("{trimmed}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::InvalidUrl(format!(
                "unsupported scheme '{other}' in {trimmed}"
            )))
        }
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ApiError::InvalidUrl(format!("{trimmed}: missing host")));
    }

    parsed.set_fragment(None);
    strip_trailing_dots(&mut parsed, trimmed)?;
    // Credentials never reach cache keys, responses or logs
    let credentials_removed = parsed.set_username("").is_ok() && parsed.set_password(None).is_ok();
    if !credentials_removed {
        return Err(ApiError::InvalidUrl(format!(
            "{trimmed}: cannot remove credentials"
        )));
    }
    Ok(parsed)
}

/// Rewrites a fully qualified `example.com.` to `example.com`.
fn strip_trailing_dots(url: &mut Url, raw: &str) -> Result<(), ApiError> {
    let stripped = match url.host() {
        Some(Host::Domain(name)) if name.ends_with('.') => name.trim_end_matches('.').to_string(),
        _ => return Ok(()),
    };
    url.set_host(Some(&stripped))
        .map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
}

fn check_length(url: &str) -> Result<(), ApiError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(ApiError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        )));
    }
    Ok(())
}

/// Whether the input starts with `<scheme>://`.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`.
/// Inputs like `example.com:8080` have no `://` and get the default scheme.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
