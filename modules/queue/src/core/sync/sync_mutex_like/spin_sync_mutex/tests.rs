use super::SpinSyncMutex;
use crate::core::{
  queue::{QueueError, QueueSignal, QueueState},
  sync::SyncMutexLike,
};

struct NoSignal;

impl QueueSignal for NoSignal {
  fn notify(&self) -> bool {
    false
  }

  fn clear(&self) {}
}

#[test]
fn lock_grants_mutable_access() {
  let mutex = SpinSyncMutex::new(1_u32);
  {
    let mut guard = mutex.lock();
    *guard += 41;
  }
  assert_eq!(*mutex.lock(), 42);
}

#[test]
fn with_lock_drives_queue_state() {
  let mutex = SpinSyncMutex::new(QueueState::<u32, NoSignal>::new(1, None));
  assert_eq!(mutex.with_lock(|state| state.enqueue(7, 0)), Ok(()));
  assert_eq!(mutex.with_lock(|state| state.enqueue(8, 0)), Err(QueueError::Overflow(8)));
  assert_eq!(mutex.with_lock(|state| state.dequeue().map(|container| container.into_element())), Ok(7));
  assert!(mutex.lock().is_empty());
}
