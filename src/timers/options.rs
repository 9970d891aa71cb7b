//! Options accepted when registering a timer

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tick period used when none is given (or the given one is unusable).
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Options for a named timer.
///
/// Currently the only option is the tick interval. Invalid values never
/// raise: a zero interval silently falls back to [`DEFAULT_INTERVAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerOptions {
    /// Tick period of the timer.
    pub interval: Duration,
}

impl Default for TimerOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl TimerOptions {
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Interval actually used for scheduling (zero degrades to the default).
    pub(crate) fn effective_interval(self) -> Duration {
        if self.interval.is_zero() {
            DEFAULT_INTERVAL
        } else {
            self.interval
        }
    }
}
