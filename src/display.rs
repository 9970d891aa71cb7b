//! Elapsed-time breakdown for display layers
//!
//! Rendering layers consume a timer's `current` snapshot together with
//! their own reference start time and want clock-style fields out of the
//! difference. [`TimeParts`] is that floor-division breakdown;
//! [`zero_pad`] is the matching two-digit padding helper.

use std::time::Duration;

use tokio::time::Instant;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HOUR: u64 = 3_600_000;

/// Floor-division breakdown of an elapsed duration.
///
/// The `total_*` fields carry the whole elapsed span in that unit; the
/// unit fields are wrapped for clock display (`seconds` in 0..60,
/// `minutes` in 0..60, `hours` in 0..24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeParts {
    pub milliseconds: u64,
    pub seconds: u64,
    pub total_seconds: u64,
    pub minutes: u64,
    pub total_minutes: u64,
    pub hours: u64,
    pub total_hours: u64,
    pub total_days: u64,
}

impl TimeParts {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        let ms = elapsed.as_millis() as u64;
        Self {
            milliseconds: ms,
            seconds: (ms / MILLIS_PER_SECOND) % 60,
            total_seconds: ms / MILLIS_PER_SECOND,
            minutes: (ms / MILLIS_PER_MINUTE) % 60,
            total_minutes: ms / MILLIS_PER_MINUTE,
            hours: (ms / MILLIS_PER_HOUR) % 24,
            total_hours: ms / MILLIS_PER_HOUR,
            total_days: ms / MILLIS_PER_HOUR / 24,
        }
    }

    /// Breakdown of the absolute difference between two instants. The
    /// caller's reference start may postdate the timer's most recent tick.
    pub fn between(start: Instant, current: Instant) -> Self {
        let elapsed = if current >= start {
            current - start
        } else {
            start - current
        };
        Self::from_elapsed(elapsed)
    }
}

/// Left-pad a value to two digits for clock-style display.
pub fn zero_pad(value: u64) -> String {
    format!("{value:02}")
}
