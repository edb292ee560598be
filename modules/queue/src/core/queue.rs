mod batch_error;
mod container;
mod ordered_storage;
mod queue_config;
mod queue_error;
mod queue_signal;
mod queue_state;

pub use batch_error::BatchError;
pub use container::Container;
pub use ordered_storage::OrderedStorage;
pub use queue_config::QueueConfig;
pub use queue_error::QueueError;
pub use queue_signal::QueueSignal;
pub use queue_state::QueueState;

/// Smallest capacity a queue can be configured with.
pub const MIN_SIZE: usize = 1;

/// Capacity used by [`QueueConfig::default`].
pub const DEFAULT_SIZE: usize = MIN_SIZE;

/// Priority assigned to elements enqueued without an explicit priority.
pub const DEFAULT_PRIORITY: i64 = 0;

/// Coerces a requested capacity into the valid range.
#[must_use]
pub const fn normalize_size(size: usize) -> usize {
  if size < MIN_SIZE { MIN_SIZE } else { size }
}
