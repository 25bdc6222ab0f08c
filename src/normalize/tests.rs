// Normalizer tests.

use super::*;
use proptest::prelude::*;

fn host_of(raw: &str) -> String {
    normalize(raw).unwrap().host.url.to_string()
}

fn domain_of(raw: &str) -> String {
    normalize(raw).unwrap().domain.url.to_string()
}

#[test]
fn test_normalize_adds_https_and_default_path() {
    assert_eq!(host_of("instagram.com"), "https://instagram.com/");
    assert_eq!(domain_of("instagram.com"), "https://instagram.com/");
}

#[test]
fn test_normalize_bare_domain_has_no_distinct_fallback() {
    let target = normalize("instagram.com").unwrap();
    assert!(!target.has_distinct_domain());
    assert_eq!(target.host.kind, ProbeKind::Host);
    assert_eq!(target.domain.kind, ProbeKind::Domain);
}

#[test]
fn test_normalize_preserves_http() {
    assert_eq!(host_of("http://example.com"), "http://example.com/");
    assert_eq!(domain_of("http://www.example.com/x"), "http://example.com/");
}

#[test]
fn test_normalize_preserves_path_and_query() {
    let target = normalize("https://sub.example.com/page?key=value&other=1").unwrap();
    assert_eq!(
        target.host.url.as_str(),
        "https://sub.example.com/page?key=value&other=1"
    );
    assert_eq!(target.domain.url.as_str(), "https://example.com/");
    assert!(target.has_distinct_domain());
}

#[test]
fn test_normalize_path_on_bare_domain_is_distinct() {
    let target = normalize("example.com/status").unwrap();
    assert_eq!(target.host.url.as_str(), "https://example.com/status");
    assert_eq!(target.domain.url.as_str(), "https://example.com/");
    assert!(target.has_distinct_domain());
}

#[test]
fn test_normalize_drops_fragment() {
    assert_eq!(host_of("example.com/path#section"), "https://example.com/path");
}

#[test]
fn test_normalize_lowercases_scheme_and_host() {
    assert_eq!(host_of("HTTPS://WWW.Example.COM/Path"), "https://www.example.com/Path");
}

#[test]
fn test_normalize_trims_whitespace() {
    assert_eq!(host_of("  example.com  "), "https://example.com/");
}

#[test]
fn test_normalize_keeps_port_on_host_only() {
    let target = normalize("example.com:8080/health").unwrap();
    assert_eq!(target.host.url.as_str(), "https://example.com:8080/health");
    assert_eq!(target.domain.url.as_str(), "https://example.com/");
}

#[test]
fn test_normalize_drops_default_port() {
    assert_eq!(host_of("https://example.com:443/"), "https://example.com/");
}

#[test]
fn test_normalize_accepts_localhost() {
    let target = normalize("localhost").unwrap();
    assert_eq!(target.host.url.as_str(), "https://localhost/");
    assert!(!target.has_distinct_domain());
}

#[test]
fn test_normalize_accepts_unresolvable_host() {
    let target = normalize("https://this-host-does-not-exist.invalid").unwrap();
    assert_eq!(
        target.host.url.as_str(),
        "https://this-host-does-not-exist.invalid/"
    );
    assert!(!target.has_distinct_domain());
}

#[test]
fn test_normalize_ipv6() {
    assert_eq!(host_of("[2001:db8::1]/path"), "https://[2001:db8::1]/path");
    assert_eq!(domain_of("http://[2001:db8::1]:8080"), "http://[2001:db8::1]/");
}

#[test]
fn test_normalize_query_value_containing_scheme() {
    assert_eq!(
        host_of("example.com/go?to=https://other.org"),
        "https://example.com/go?to=https://other.org"
    );
}

#[test]
fn test_normalize_fully_qualified_host_matches_bare_domain() {
    let target = normalize("example.com.").unwrap();
    assert_eq!(target.host.url.as_str(), "https://example.com/");
    assert!(!target.has_distinct_domain());
    assert_eq!(
        host_of("https://sub.example.com.:8080/x"),
        "https://sub.example.com:8080/x"
    );
}

#[test]
fn test_normalize_rejects_host_of_only_dots() {
    assert!(matches!(normalize("https://./"), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_normalize_drops_credentials() {
    let target = normalize("user:pw@www.example.com/p").unwrap();
    assert_eq!(target.host.url.as_str(), "https://www.example.com/p");
    assert_eq!(target.domain.url.as_str(), "https://example.com/");
    assert_eq!(host_of("http://admin@example.com"), "http://example.com/");
}

#[test]
fn test_normalize_rejects_empty() {
    assert!(matches!(normalize(""), Err(ApiError::InvalidUrl(_))));
    assert!(matches!(normalize("   "), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_normalize_rejects_malformed() {
    assert!(matches!(
        normalize("not a url at all!!!"),
        Err(ApiError::InvalidUrl(_))
    ));
    assert!(matches!(normalize("://example.com"), Err(ApiError::InvalidUrl(_))));
    assert!(matches!(normalize("https://"), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_normalize_rejects_unsupported_schemes() {
    for raw in ["ftp://example.com", "file:///etc/passwd", "ws://example.com/socket"] {
        let err = normalize(raw).unwrap_err();
        assert!(
            matches!(&err, ApiError::InvalidUrl(msg) if msg.contains("unsupported scheme")),
            "{raw} gave {err:?}"
        );
    }
}

#[test]
fn test_normalize_rejects_too_long_url() {
    let long_url = format!("https://example.com/{}", "a".repeat(2100));
    assert!(matches!(normalize(&long_url), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_normalize_accepts_url_at_limit() {
    // "https://example.com/" is 20 chars
    let url_at_limit = format!("https://example.com/{}", "a".repeat(2028));
    assert_eq!(url_at_limit.len(), 2048);
    assert!(normalize(&url_at_limit).is_ok());
}

#[test]
fn test_normalize_rejects_too_long_after_adding_scheme() {
    // 12 + 2036 = 2048 before the scheme, 2056 after
    let url = format!("example.com/{}", "a".repeat(2036));
    assert_eq!(url.len(), 2048);
    assert!(matches!(normalize(&url), Err(ApiError::InvalidUrl(_))));
}

#[test]
fn test_has_scheme() {
    assert!(has_scheme("https://example.com"));
    assert!(has_scheme("svn+ssh://example.com"));
    assert!(!has_scheme("example.com"));
    assert!(!has_scheme("example.com:8080"));
    assert!(!has_scheme("://example.com"));
    assert!(!has_scheme("1http://example.com"));
    assert!(!has_scheme("example.com/?next=http://x"));
}

proptest! {
    #[test]
    fn test_normalize_is_idempotent(
        host in "[a-z]{1,12}(\\.[a-z]{1,12}){0,2}\\.[a-z]{2,5}",
        path in prop::collection::vec("[a-zA-Z0-9_-]{1,8}", 0..4),
        scheme in prop_oneof![Just(""), Just("http://"), Just("https://")],
    ) {
        let raw = format!("{}{}/{}", scheme, host, path.join("/"));
        let first = normalize(&raw).unwrap();
        let second = normalize(first.host.url.as_str()).unwrap();
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn test_normalize_is_deterministic(raw in "\\PC{0,64}") {
        prop_assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn test_domain_url_is_its_own_domain(host in "[a-z]{1,12}\\.[a-z]{1,12}\\.[a-z]{2,5}") {
        let target = normalize(&host).unwrap();
        let again = normalize(target.domain.url.as_str()).unwrap();
        prop_assert!(!again.has_distinct_domain());
        prop_assert_eq!(again.host.url, target.domain.url);
    }
}
