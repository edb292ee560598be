use super::SyncMutexLike;

#[cfg(test)]
mod tests;

/// Spin lock for queues built without `std`.
///
/// Waiters spin instead of parking, which is acceptable because no queue operation blocks while
/// holding the lock.
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SyncMutexLike<T> for SpinSyncMutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  fn lock(&self) -> Self::Guard<'_> {
    self.0.lock()
  }
}
