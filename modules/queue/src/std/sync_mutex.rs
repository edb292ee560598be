extern crate std;

use std::sync::Mutex;

use tracing::warn;

use super::{QUEUE_LOG_TARGET, StdSyncMutexGuard};
use crate::core::sync::SyncMutexLike;


/// Queue lock backed by [`std::sync::Mutex`].
///
/// Poisoning is not propagated: a panic on another thread while the lock was held only emits a
/// warning, and the guard is recovered so queue operations keep returning their regular results.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = StdSyncMutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  fn lock(&self) -> Self::Guard<'_> {
    match self.0.lock() {
      | Ok(guard) => StdSyncMutexGuard { guard },
      | Err(poisoned) => {
        warn!(target: QUEUE_LOG_TARGET, "recovered poisoned queue lock");
        StdSyncMutexGuard { guard: poisoned.into_inner() }
      },
    }
  }
}
