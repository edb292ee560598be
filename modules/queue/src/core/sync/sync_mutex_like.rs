use core::ops::DerefMut;

mod spin_sync_mutex;

pub use spin_sync_mutex::SpinSyncMutex;

/// Lock guarding a [`QueueState`](crate::core::queue::QueueState).
///
/// The queue holds the guard for a whole operation, batch operations included, and the guard
/// releases the lock on drop.
pub trait SyncMutexLike<T> {
  /// Guard type returned by [`SyncMutexLike::lock`].
  type Guard<'a>: DerefMut<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Wraps the initial state.
  fn new(value: T) -> Self;

  /// Acquires the lock.
  fn lock(&self) -> Self::Guard<'_>;

  /// Runs `f` against the locked state and releases the lock before returning.
  fn with_lock<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.lock();
    f(&mut guard)
  }
}
