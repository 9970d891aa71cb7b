//! Error types for registry operations

use thiserror::Error;

/// The single domain error: subscribing to a name with no registered timer.
///
/// Never returned from a registry operation. It is delivered synchronously
/// through the subscriber callback as the `Err` arm of
/// [`TickResult`](crate::registry::TickResult), before `subscribe` returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChronoError {
    #[error("timer {0} not found")]
    TimerNotFound(String),
}
