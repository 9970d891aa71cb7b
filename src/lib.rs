pub mod display;
pub mod error;
pub mod registry;
pub mod timers;

// Re-exports for convenience
pub use display::{TimeParts, zero_pad};
pub use error::ChronoError;
pub use registry::{ChronoRegistry, SubscriptionId, TickResult};
pub use timers::{DEFAULT_INTERVAL, Timer, TimerOptions, TimerSnapshot};
