//! Probe failure categorization.
//!
//! Turns a `reqwest::Error` into a [`ProbeFailure`] and a human-readable
//! diagnostic suitable for the `status_text` field of a probe result.

use std::error::Error as StdError;

use super::types::ProbeFailure;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Categorizes a `reqwest::Error` into a `ProbeFailure`.
///
/// Timeouts are checked first because reqwest reports a connect timeout as
/// both a timeout and a connect error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ProbeFailure {
    if error.is_timeout() {
        ProbeFailure::Timeout
    } else if error.is_connect() {
        ProbeFailure::Connect
    } else if error.is_redirect() {
        ProbeFailure::Redirect
    } else if error.is_builder() || error.is_request() {
        ProbeFailure::Request
    } else if error.is_body() || error.is_decode() {
        ProbeFailure::Body
    } else {
        ProbeFailure::Other
    }
}

/// Builds the `status_text` diagnostic for a failed probe.
///
/// The format is `<label>: <error>: <cause>: ...`, walking the whole source
/// chain so the root cause (e.g. the DNS failure) is visible. The result is
/// sanitized and truncated to `MAX_ERROR_MESSAGE_LENGTH`.
pub fn describe_probe_error(error: &reqwest::Error) -> String {
    let kind = categorize_reqwest_error(error);
    let message = format!("{}: {}", kind.label(), error_chain(error));
    sanitize_and_truncate_error_message(&message)
}

/// Formats an error and all of its sources, separated by `": "`.
///
/// Consecutive duplicate messages are skipped; hyper and reqwest often wrap
/// an error in a layer that repeats the inner message.
pub fn error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut parts: Vec<String> = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}
