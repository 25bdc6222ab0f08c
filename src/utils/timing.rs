//! Timing helpers for probe instrumentation.

use std::time::Duration;

/// Converts a duration to whole milliseconds for log output.
///
/// Saturates at `u64::MAX` instead of wrapping.
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
