//! Registrable domain extraction.
//!
//! Uses the Public Suffix List (via `psl`) to find the registrable domain of
//! a URL's host, e.g. `example.com` for `https://www.example.com/path` and
//! `example.co.uk` for `https://shop.example.co.uk`.
//!
//! Key functions:
//! - `registrable_host()` - The registrable domain of a URL's host, or the host itself
//! - `domain_url()` - The bare-domain URL used for the fallback check

use url::{Host, Url};

/// Returns the registrable domain for the URL's host.
///
/// Falls back to the host itself when there is no registrable domain: IP
/// addresses, single-label hosts such as `localhost`, and hosts that are a
/// public suffix themselves (e.g. `co.uk`). Whether such hosts answer is for
/// the probe to find out.
///
/// Returns `None` only when the URL has no host.
pub fn registrable_host(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(name) => {
            let registrable = psl::domain_str(name).unwrap_or(name);
            Some(registrable.to_string())
        }
        // host_str() keeps the brackets around IPv6 literals
        Host::Ipv4(_) | Host::Ipv6(_) => url.host_str().map(str::to_string),
    }
}

/// Builds the bare-domain URL for a normalized host URL.
///
/// The result keeps the scheme and the registrable host only: no userinfo,
/// port, path, query or fragment. Its path is `/`, the same trailing-slash
/// form the `url` crate gives host URLs, so the two compare equal when the
/// host URL already was the bare domain.
///
/// # Errors
///
/// Returns an error if the URL has no host or the bare form fails to parse.
pub fn domain_url(url: &Url) -> Result<Url, url::ParseError> {
    let host = registrable_host(url).ok_or(url::ParseError::EmptyHost)?;
    Url::parse(&format!("{}://{}/", url.scheme(), host))
}
