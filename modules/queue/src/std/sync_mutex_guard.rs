extern crate std;

use core::ops::{Deref, DerefMut};
use std::sync::MutexGuard;

/// Guard returned by [`StdSyncMutex`](super::StdSyncMutex).
pub struct StdSyncMutexGuard<'a, T> {
  pub(crate) guard: MutexGuard<'a, T>,
}

impl<T> Deref for StdSyncMutexGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.guard
  }
}

impl<T> DerefMut for StdSyncMutexGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.guard
  }
}
