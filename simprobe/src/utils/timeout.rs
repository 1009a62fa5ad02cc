//! Timing helpers for session retries.

use std::time::Duration;

/// Base delay between attempts when a reader reports a sharing violation.
pub const BUSY_BACKOFF_MS: u64 = 250;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Linear backoff for the given 1-based attempt number.
pub fn busy_backoff(attempt: u32) -> Duration {
    ms(BUSY_BACKOFF_MS * attempt as u64)
}
