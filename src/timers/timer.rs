//! A single named periodic tick source
//!
//! # Lifecycle
//!
//! 1. Constructed with a name, options, and a tick listener
//! 2. `start()` spawns a self-rearming scheduling task
//! 3. Ticks repeat indefinitely until `stop()` (or drop) aborts the task

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep};

use super::TimerOptions;

/// Listener a timer reports into on every tick.
type TickFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Snapshot of a timer's state, delivered to subscribers on every tick.
#[derive(Debug, Clone)]
pub struct TimerSnapshot {
    /// Name the timer was registered under
    pub name: String,

    /// When the timer was constructed (monotonic)
    pub started: Instant,

    /// Most recent tick; equals `started` before the first tick.
    /// `current >= started` always.
    pub current: Instant,

    /// Configured tick period
    pub interval: Duration,
}

impl TimerSnapshot {
    /// Time elapsed between the timer's start and its most recent tick.
    pub fn elapsed(&self) -> Duration {
        self.current.duration_since(self.started)
    }
}

/// A named timer that ticks at a fixed, drift-corrected interval.
///
/// The timer only re-arms after its listener invocation returns, so ticks
/// for one timer never overlap. There is no maximum tick count; it runs
/// until [`Timer::stop`].
pub struct Timer {
    name: String,
    interval: Duration,
    started: Instant,
    current: Instant,
    listener: TickFn,
    handle: Option<JoinHandle<()>>,
}

impl Timer {
    /// Create a timer. Captures `started = current = now()`; does not start
    /// ticking until [`Timer::start`].
    ///
    /// The listener receives the timer's name on every tick. A zero
    /// interval in `opts` falls back to the default; construction never
    /// fails.
    pub fn new(
        name: impl Into<String>,
        opts: TimerOptions,
        listener: impl Fn(&str) + Send + Sync + 'static,
    ) -> Self {
        let now = Instant::now();
        Self {
            name: name.into(),
            interval: opts.effective_interval(),
            started: now,
            current: now,
            listener: Arc::new(listener),
            handle: None,
        }
    }

    /// Arm the timer. Safe to call on a running timer: the pending tick is
    /// replaced, never duplicated. Must be called within a Tokio runtime.
    pub fn start(&mut self) -> &mut Self {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }

        let name = self.name.clone();
        let listener = Arc::clone(&self.listener);
        let started = self.started;
        let interval = self.interval;

        self.handle = Some(tokio::spawn(async move {
            // Self-perpetuating chain: every iteration recomputes drift
            // against the original start boundary before re-arming.
            loop {
                sleep(next_delay(started, Instant::now(), interval)).await;
                listener(&name);
            }
        }));

        tracing::debug!(timer = %self.name, interval_ms = interval.as_millis() as u64, "timer started");
        self
    }

    /// Cancel the pending tick and release the scheduling task. No-op if
    /// the timer is not running.
    pub fn stop(&mut self) -> &mut Self {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(timer = %self.name, "timer stopped");
        }
        self
    }

    /// Whether a scheduling task is live (a tick is pending).
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record a tick at `now`.
    pub(crate) fn mark_tick(&mut self, now: Instant) {
        self.current = now;
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            name: self.name.clone(),
            started: self.started,
            current: self.current,
            interval: self.interval,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        // A dropped timer must not leave its scheduling task behind.
        self.stop();
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("name", &self.name)
            .field("interval", &self.interval)
            .field("started", &self.started)
            .field("current", &self.current)
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

/// Delay until the next tick boundary:
/// `interval - ((now - started) % interval)`.
///
/// Subtracting the drift keeps successive ticks aligned to the start
/// boundary regardless of how late the previous fire actually landed.
pub(super) fn next_delay(started: Instant, now: Instant, interval: Duration) -> Duration {
    let interval_ms = interval.as_millis().max(1);
    let drift_ms = now.duration_since(started).as_millis() % interval_ms;
    Duration::from_millis((interval_ms - drift_ms) as u64)
}
