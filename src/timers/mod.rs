//! Timer primitives
//!
//! A [`Timer`] is a single named periodic tick source. It owns its own
//! scheduling task and elapsed-time snapshot, and has no knowledge of
//! subscribers: on every tick it calls back into whatever listener it was
//! constructed with.
//!
//! # Drift correction
//!
//! Each tick re-arms itself by computing how far the clock has drifted past
//! the last period boundary and sleeping only the remainder, so ticks stay
//! aligned to the original start boundary instead of accumulating
//! scheduling latency.

mod options;
mod timer;


pub use options::{DEFAULT_INTERVAL, TimerOptions};
pub use timer::{Timer, TimerSnapshot};
