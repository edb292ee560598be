//! `std` runtime: OS mutex, crossbeam signal channel and the [`BoundedQueue`] facade.

mod bounded_queue;
mod channel_signal;
mod sync_mutex;
mod sync_mutex_guard;

pub use bounded_queue::{BoundedQueue, SpinBoundedQueue};
pub use channel_signal::ChannelSignal;
pub use sync_mutex::StdSyncMutex;
pub use sync_mutex_guard::StdSyncMutexGuard;

/// `tracing` target used by every event emitted from this crate.
pub const QUEUE_LOG_TARGET: &str = "fraktor::queue";
