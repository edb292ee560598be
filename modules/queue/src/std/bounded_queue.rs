use alloc::vec::Vec;
use core::marker::PhantomData;

use crossbeam_channel::Receiver;
use tracing::{debug, trace};

use super::{ChannelSignal, QUEUE_LOG_TARGET, StdSyncMutex};
use crate::core::{
  queue::{BatchError, Container, DEFAULT_PRIORITY, QueueConfig, QueueError, QueueState},
  sync::{SpinSyncMutex, SyncMutexLike},
};


/// Thread-safe bounded queue with FIFO and priority ordering.
///
/// Every operation takes the queue's single lock for its whole duration, so batch operations are
/// observed atomically by other callers. No operation waits for space or data: overflow and
/// underflow are reported immediately through the returned `Result`.
///
/// Elements inserted through [`enqueue`](Self::enqueue) carry [`DEFAULT_PRIORITY`]; with equal
/// priorities the queue is FIFO. Elements with a higher priority are dequeued first, and equal
/// priorities keep their insertion order.
///
/// Unless created in polling mode, each successful insertion pushes an advisory notification to the
/// channel returned by [`signal`](Self::signal). Notifications are dropped when the channel buffer
/// (sized like the queue) is full, so a woken consumer must re-check the queue rather than assume
/// one element per notification.
pub struct BoundedQueue<T, M = StdSyncMutex<QueueState<T, ChannelSignal>>>
where
  M: SyncMutexLike<QueueState<T, ChannelSignal>>, {
  state: M,
  _pd:   PhantomData<fn() -> T>,
}

/// Bounded queue guarded by a spin lock instead of an OS mutex.
pub type SpinBoundedQueue<T> = BoundedQueue<T, SpinSyncMutex<QueueState<T, ChannelSignal>>>;

impl<T, M> BoundedQueue<T, M>
where
  M: SyncMutexLike<QueueState<T, ChannelSignal>>,
{
  /// Creates a queue holding at most `size` elements.
  ///
  /// A `size` of `0` is coerced to [`MIN_SIZE`](crate::MIN_SIZE). With `polling` set no
  /// notification channel is created.
  #[must_use]
  pub fn new(size: usize, polling: bool) -> Self {
    Self::from_config(QueueConfig::new(size).with_polling(polling))
  }

  /// Creates a queue from a [`QueueConfig`].
  #[must_use]
  pub fn from_config(config: QueueConfig) -> Self {
    let signal = (!config.polling()).then(|| ChannelSignal::with_capacity(config.size()));
    debug!(target: QUEUE_LOG_TARGET, size = config.size(), polling = config.polling(), "queue created");
    Self { state: M::new(QueueState::new(config.size(), signal)), _pd: PhantomData }
  }

  /// Returns a receiver for insertion notifications.
  ///
  /// Returns `None` in polling mode and after [`close`](Self::close); receivers obtained earlier
  /// report disconnection once the queue is closed.
  #[must_use]
  pub fn signal(&self) -> Option<Receiver<()>> {
    self.state.lock().signal().map(ChannelSignal::subscribe)
  }

  /// Enqueues an element with [`DEFAULT_PRIORITY`].
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Overflow`] with the element when the queue is full or closed.
  pub fn enqueue(&self, element: T) -> Result<(), QueueError<T>> {
    self.enqueue_with_priority(element, DEFAULT_PRIORITY)
  }

  /// Enqueues an element with an explicit priority.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Overflow`] with the element when the queue is full or closed.
  pub fn enqueue_with_priority(&self, element: T, priority: i64) -> Result<(), QueueError<T>> {
    let mut state = self.state.lock();
    let result = state.enqueue(element, priority);
    match &result {
      | Ok(()) => trace!(target: QUEUE_LOG_TARGET, priority, len = state.len(), "enqueued"),
      | Err(_) => trace!(target: QUEUE_LOG_TARGET, priority, size = state.size(), "enqueue overflow"),
    }
    result
  }

  /// Enqueues elements one by one with [`DEFAULT_PRIORITY`], firing a single notification.
  ///
  /// # Errors
  ///
  /// Returns [`BatchError::Overflow`] at the first element that does not fit. Elements inserted
  /// before it remain queued; the rest are returned in the error.
  pub fn enqueue_multiple<I>(&self, elements: I) -> Result<(), BatchError<T>>
  where
    I: IntoIterator<Item = T>, {
    self.enqueue_multiple_with_priority(elements.into_iter().map(|element| (element, DEFAULT_PRIORITY)))
  }

  /// Enqueues `(element, priority)` pairs one by one, firing a single notification.
  ///
  /// # Errors
  ///
  /// Returns [`BatchError::Overflow`] at the first element that does not fit. Elements inserted
  /// before it remain queued; the rest are returned in the error.
  pub fn enqueue_multiple_with_priority<I>(&self, items: I) -> Result<(), BatchError<T>>
  where
    I: IntoIterator<Item = (T, i64)>, {
    let mut state = self.state.lock();
    let result = state.enqueue_multiple(items);
    if let Err(BatchError::Overflow { inserted, rejected }) = &result {
      trace!(target: QUEUE_LOG_TARGET, inserted, rejected = rejected.len(), "batch enqueue overflow");
    }
    result
  }

  /// Removes and returns the head element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Underflow`] when the queue is empty or closed.
  pub fn dequeue(&self) -> Result<T, QueueError<T>> {
    self.dequeue_with_priority().map(|(element, _)| element)
  }

  /// Removes and returns the head element with its priority.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Underflow`] when the queue is empty or closed.
  pub fn dequeue_with_priority(&self) -> Result<(T, i64), QueueError<T>> {
    let mut state = self.state.lock();
    let container = state.dequeue()?;
    trace!(target: QUEUE_LOG_TARGET, priority = container.priority(), len = state.len(), "dequeued");
    Ok(container.into_parts())
  }

  /// Removes `count` head elements under one lock.
  ///
  /// # Errors
  ///
  /// Returns [`BatchError::Underflow`] with the elements removed so far when the queue runs empty
  /// first.
  pub fn dequeue_multiple(&self, count: usize) -> Result<Vec<T>, BatchError<T>> {
    self.state.with_lock(|state| state.dequeue_multiple(count))
  }

  /// Empties the queue and returns its contents head to tail.
  #[must_use = "flushed elements are dropped when not used"]
  pub fn flush(&self) -> Vec<Container<T>> {
    let drained = self.state.with_lock(|state| state.flush());
    debug!(target: QUEUE_LOG_TARGET, flushed = drained.len(), "queue flushed");
    drained
  }

  /// Flushes the queue and changes its capacity to `new_size` (at least one).
  ///
  /// The flushed contents are returned. Has no effect on a closed queue. The notification channel
  /// is not recreated: its buffer keeps the capacity the queue was created with.
  #[must_use = "flushed elements are dropped when not used"]
  pub fn resize(&self, new_size: usize) -> Vec<Container<T>> {
    let mut state = self.state.lock();
    let drained = state.resize(new_size);
    debug!(target: QUEUE_LOG_TARGET, size = state.size(), flushed = drained.len(), "queue resized");
    drained
  }

  /// Drops the notification channel and every queued element, leaving a zero-capacity queue.
  ///
  /// Pending notifications are discarded first, so receivers report disconnection right away.
  ///
  /// Calling it again has no effect.
  pub fn close(&self) {
    if self.state.with_lock(|state| state.close()) {
      debug!(target: QUEUE_LOG_TARGET, "queue closed");
    }
  }

  /// Returns the capacity. Zero once closed.
  #[must_use]
  pub fn size(&self) -> usize {
    self.state.with_lock(|state| state.size())
  }

  /// Returns the number of queued elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.state.with_lock(|state| state.len())
  }

  /// Indicates whether the queue holds no element.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.state.with_lock(|state| state.is_empty())
  }

  /// Indicates whether the next insertion would overflow.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.state.with_lock(|state| state.is_full())
  }

  /// Indicates whether the queue has been closed.
  #[must_use]
  pub fn is_closed(&self) -> bool {
    self.state.with_lock(|state| state.is_closed())
  }

  /// Indicates whether the queue was created in polling mode.
  #[must_use]
  pub fn is_polling(&self) -> bool {
    self.state.with_lock(|state| state.is_polling())
  }
}

impl<T, M> BoundedQueue<T, M>
where
  T: Clone,
  M: SyncMutexLike<QueueState<T, ChannelSignal>>,
{
  /// Copies every element head to tail. `None` when empty.
  #[must_use]
  pub fn peek(&self) -> Option<Vec<T>> {
    let state = self.state.lock();
    if state.is_empty() {
      return None;
    }
    Some(state.containers().map(|container| container.element().clone()).collect())
  }

  /// Copies every element with its priority head to tail. `None` when empty.
  #[must_use]
  pub fn peek_with_priority(&self) -> Option<Vec<(T, i64)>> {
    let state = self.state.lock();
    if state.is_empty() {
      return None;
    }
    Some(state.containers().map(|container| (container.element().clone(), container.priority())).collect())
  }

  /// Copies the element a [`dequeue`](Self::dequeue) would return.
  #[must_use]
  pub fn peek_head(&self) -> Option<T> {
    self.peek_head_with_priority().map(|(element, _)| element)
  }

  /// Copies the head element with its priority.
  #[must_use]
  pub fn peek_head_with_priority(&self) -> Option<(T, i64)> {
    self.state.lock().head().map(|container| (container.element().clone(), container.priority()))
  }

  /// Copies the tail element: lowest priority, newest on ties.
  #[must_use]
  pub fn peek_tail(&self) -> Option<T> {
    self.peek_tail_with_priority().map(|(element, _)| element)
  }

  /// Copies the tail element with its priority.
  #[must_use]
  pub fn peek_tail_with_priority(&self) -> Option<(T, i64)> {
    self.state.lock().tail().map(|container| (container.element().clone(), container.priority()))
  }
}

impl<T, M> core::fmt::Debug for BoundedQueue<T, M>
where
  M: SyncMutexLike<QueueState<T, ChannelSignal>>,
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let state = self.state.lock();
    f.debug_struct("BoundedQueue")
      .field("size", &state.size())
      .field("len", &state.len())
      .field("polling", &state.is_polling())
      .field("closed", &state.is_closed())
      .finish()
  }
}
