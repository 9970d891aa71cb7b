//! Chrono service - owns named timers and routes ticks to subscribers
//!
//! Architecture:
//! - ChronoRegistry: cheap clonable handle over shared registry state
//! - RegistryInner: the two maps (timers, listeners) behind one mutex
//! - on_tick: called back by each timer's scheduling task; snapshots under
//!   the lock, fans out outside it

use std::sync::{Arc, Mutex, MutexGuard};

use hashbrown::HashMap;
use tokio::time::Instant;

use super::subscriber::{ListenerFn, Subscriber, SubscriptionId, TickResult};
use crate::error::ChronoError;
use crate::timers::{Timer, TimerOptions, TimerSnapshot};

/// Registry of named timers and the subscriber lists attached to them.
///
/// Constructed explicitly and passed around by handle (clones share state)
/// rather than living in ambient global state. Typical lifetime is one
/// registry per application, created at startup and torn down with
/// [`ChronoRegistry::clear`].
///
/// Timer ownership and subscriptions are orthogonal: removing a timer
/// leaves its subscriber list intact, and a leftover list only receives
/// ticks again once a timer is re-registered under that name and started.
#[derive(Clone, Default)]
pub struct ChronoRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

#[derive(Default)]
struct RegistryInner {
    timers: HashMap<String, Timer>,
    listeners: HashMap<String, Vec<Subscriber>>,
    next_id: u64,
}

impl RegistryInner {
    fn next_subscription_id(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId::new(self.next_id)
    }
}

impl ChronoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a timer under `name`, wired to report its ticks back into
    /// this registry. The timer is not started.
    ///
    /// Re-adding an existing name stops the replaced timer before
    /// discarding it, so its scheduling task is never orphaned.
    pub fn add_timer(&self, name: &str, opts: TimerOptions) -> &Self {
        let weak = Arc::downgrade(&self.inner);
        let timer = Timer::new(name, opts, move |timer_name: &str| {
            if let Some(inner) = weak.upgrade() {
                Self::on_tick(&inner, timer_name);
            }
        });

        let mut inner = self.lock();
        if let Some(mut old) = inner.timers.insert(name.to_string(), timer) {
            old.stop();
        }
        tracing::debug!(timer = name, "timer registered");
        self
    }

    /// Stop and remove the timer under `name`. No-op if absent. Any
    /// subscriber list for `name` is left untouched.
    pub fn remove_timer(&self, name: &str) -> &Self {
        let mut inner = self.lock();
        if let Some(mut timer) = inner.timers.remove(name) {
            timer.stop();
            tracing::debug!(timer = name, "timer removed");
        }
        self
    }

    /// Tick handler every registered timer reports into.
    ///
    /// Updates the timer's current-time snapshot under the lock, then fans
    /// the snapshot out in subscription order with the lock released, so
    /// listeners may re-enter the registry.
    fn on_tick(inner: &Mutex<RegistryInner>, name: &str) {
        let (snapshot, subscribers) = {
            let mut guard = inner.lock().unwrap_or_else(|e| e.into_inner());
            let Some(timer) = guard.timers.get_mut(name) else {
                return;
            };
            timer.mark_tick(Instant::now());
            let snapshot = timer.snapshot();
            let subscribers = guard.listeners.get(name).cloned().unwrap_or_default();
            (snapshot, subscribers)
        };

        for subscriber in &subscribers {
            subscriber.deliver(Ok(&snapshot));
        }
    }

    /// Attach a listener to `name`, to be invoked on every tick of that
    /// timer with the current snapshot.
    ///
    /// If no timer is registered under `name`, the listener is invoked
    /// synchronously exactly once with
    /// [`TimerNotFound`](ChronoError::TimerNotFound) before this returns,
    /// is not retained, and `None` comes back. Otherwise the listener is
    /// appended to the ordered subscriber list and its identity token is
    /// returned for use with [`ChronoRegistry::unsubscribe`].
    pub fn subscribe<F>(&self, name: &str, listener: F) -> Option<SubscriptionId>
    where
        F: FnMut(TickResult<'_>) + Send + 'static,
    {
        let mut listener: ListenerFn = Box::new(listener);

        {
            let mut inner = self.lock();
            if inner.timers.contains_key(name) {
                let id = inner.next_subscription_id();
                inner
                    .listeners
                    .entry(name.to_string())
                    .or_default()
                    .push(Subscriber::new(id, listener));
                return Some(id);
            }
        }

        listener(Err(ChronoError::TimerNotFound(name.to_string())));
        None
    }

    /// Detach the subscriber identified by `id` from `name`, preserving the
    /// order of the remainder. No-op if the name or token is unknown.
    pub fn unsubscribe(&self, name: &str, id: SubscriptionId) -> &Self {
        let mut inner = self.lock();
        if let Some(list) = inner.listeners.get_mut(name)
            && let Some(pos) = list.iter().position(|s| s.id() == id)
        {
            list.remove(pos);
        }
        self
    }

    /// Start the timer under `name`. Silently does nothing if absent.
    pub fn start(&self, name: &str) -> &Self {
        if let Some(timer) = self.lock().timers.get_mut(name) {
            timer.start();
        }
        self
    }

    /// Start every registered timer. Each recomputes its own drift from its
    /// own start boundary.
    pub fn start_all(&self) -> &Self {
        for timer in self.lock().timers.values_mut() {
            timer.start();
        }
        self
    }

    /// Stop the timer under `name`. Silently does nothing if absent.
    pub fn stop(&self, name: &str) -> &Self {
        if let Some(timer) = self.lock().timers.get_mut(name) {
            timer.stop();
        }
        self
    }

    /// Stop every registered timer.
    pub fn stop_all(&self) -> &Self {
        for timer in self.lock().timers.values_mut() {
            timer.stop();
        }
        self
    }

    /// Full teardown: stop every timer, then drop all timers and all
    /// subscriber lists.
    pub fn clear(&self) {
        let mut inner = self.lock();
        for timer in inner.timers.values_mut() {
            timer.stop();
        }
        inner.timers.clear();
        inner.listeners.clear();
        tracing::debug!("registry cleared");
    }

    pub fn has_timer(&self, name: &str) -> bool {
        self.lock().timers.contains_key(name)
    }

    /// Whether the timer under `name` exists and is actively ticking.
    pub fn is_running(&self, name: &str) -> bool {
        self.lock().timers.get(name).is_some_and(Timer::is_running)
    }

    pub fn timer_count(&self) -> usize {
        self.lock().timers.len()
    }

    pub fn subscriber_count(&self, name: &str) -> usize {
        self.lock().listeners.get(name).map_or(0, Vec::len)
    }

    /// Current snapshot of the timer under `name`, for callers (such as a
    /// display layer) that want to read elapsed time without subscribing.
    pub fn snapshot(&self, name: &str) -> Option<TimerSnapshot> {
        self.lock().timers.get(name).map(Timer::snapshot)
    }
}
