//! Chrono registry
//!
//! This module provides:
//! - **Service**: [`ChronoRegistry`], the owner of all named timers and
//!   their subscriber lists
//! - **Subscribers**: subscription bookkeeping and delivery, keyed by
//!   [`SubscriptionId`]
//!
//! # Fan-out
//!
//! On each tick of a named timer, the registry updates that timer's
//! current-time snapshot and delivers it to every subscriber for the name,
//! in subscription order. Subscribing to a name with no registered timer
//! reports [`TimerNotFound`](crate::ChronoError::TimerNotFound) through the
//! listener synchronously and retains nothing.

mod service;
mod subscriber;


pub use service::ChronoRegistry;
pub use subscriber::{SubscriptionId, TickResult};
