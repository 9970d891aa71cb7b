//! Subscription bookkeeping and delivery

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex};

use crate::error::ChronoError;
use crate::timers::TimerSnapshot;

/// What a subscriber receives on every delivery: the timer's tick snapshot,
/// or the one domain error (the name had no registered timer at subscribe
/// time).
pub type TickResult<'a> = Result<&'a TimerSnapshot, ChronoError>;

pub(super) type ListenerFn = Box<dyn FnMut(TickResult<'_>) + Send>;

/// Identity token for a registered listener.
///
/// Removal is by identity, not value: `unsubscribe` only removes the
/// subscriber whose token matches the one returned by the corresponding
/// `subscribe` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// A registered listener plus its identity token.
#[derive(Clone)]
pub(super) struct Subscriber {
    id: SubscriptionId,
    callback: Arc<Mutex<ListenerFn>>,
}

impl Subscriber {
    pub(super) fn new(id: SubscriptionId, callback: ListenerFn) -> Self {
        Self {
            id,
            callback: Arc::new(Mutex::new(callback)),
        }
    }

    pub(super) fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Invoke the listener, isolating panics so one misbehaving subscriber
    /// cannot block delivery to the rest of the list in the same tick.
    pub(super) fn deliver(&self, event: TickResult<'_>) {
        let mut callback = self.callback.lock().unwrap_or_else(|e| e.into_inner());
        if catch_unwind(AssertUnwindSafe(|| (*callback)(event))).is_err() {
            tracing::error!(subscription = self.id.0, "subscriber panicked during tick delivery");
        }
    }
}
