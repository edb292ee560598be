use alloc::vec::Vec;

use super::{BatchError, Container, OrderedStorage, QueueError, QueueSignal, normalize_size};


/// Unsynchronised state machine of a bounded queue.
///
/// Callers wrap it in a [`SyncMutexLike`](crate::core::sync::SyncMutexLike) and hold the guard for
/// the whole operation; nothing here blocks. The stored length never exceeds [`size`](Self::size).
/// After [`close`](Self::close) the size drops to zero, so every later insertion overflows and
/// every removal underflows.
#[derive(Debug)]
pub struct QueueState<T, S> {
  storage: OrderedStorage<T>,
  size:    usize,
  signal:  Option<S>,
  polling: bool,
  closed:  bool,
}

impl<T, S> QueueState<T, S> {
  /// Creates an empty state. Passing no signal selects polling mode.
  ///
  /// A size of `0` is coerced to [`MIN_SIZE`](super::MIN_SIZE).
  #[must_use]
  pub fn new(size: usize, signal: Option<S>) -> Self {
    let size = normalize_size(size);
    let polling = signal.is_none();
    Self { storage: OrderedStorage::with_capacity(size), size, signal, polling, closed: false }
  }

  /// Returns the capacity. Zero once closed.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.size
  }

  /// Returns the number of queued elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.storage.len()
  }

  /// Indicates whether no element is queued.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.storage.is_empty()
  }

  /// Indicates whether the next insertion would overflow.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len() >= self.size
  }

  /// Indicates whether [`close`](Self::close) has run.
  #[must_use]
  pub const fn is_closed(&self) -> bool {
    self.closed
  }

  /// Indicates whether the state was created without a signal.
  #[must_use]
  pub const fn is_polling(&self) -> bool {
    self.polling
  }

  /// Returns the insertion signal, if any. `None` in polling mode and after close.
  #[must_use]
  pub const fn signal(&self) -> Option<&S> {
    self.signal.as_ref()
  }

  /// Returns the head container without removing it.
  #[must_use]
  pub fn head(&self) -> Option<&Container<T>> {
    self.storage.head()
  }

  /// Returns the tail container without removing it.
  #[must_use]
  pub fn tail(&self) -> Option<&Container<T>> {
    self.storage.tail()
  }

  /// Iterates the queued containers head to tail.
  pub fn containers(&self) -> impl Iterator<Item = &Container<T>> {
    self.storage.iter()
  }

  /// Removes and returns the head container.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Underflow`] when the queue is empty.
  pub fn dequeue(&mut self) -> Result<Container<T>, QueueError<T>> {
    self.storage.pop_head().ok_or(QueueError::Underflow)
  }

  /// Removes up to `count` head elements.
  ///
  /// # Errors
  ///
  /// Returns [`BatchError::Underflow`] with the elements removed so far when the queue runs empty
  /// before `count` elements were removed.
  pub fn dequeue_multiple(&mut self, count: usize) -> Result<Vec<T>, BatchError<T>> {
    let mut collected = Vec::with_capacity(count.min(self.len()));
    for _ in 0..count {
      match self.storage.pop_head() {
        | Some(container) => collected.push(container.into_element()),
        | None => return Err(BatchError::Underflow { collected }),
      }
    }
    Ok(collected)
  }

  fn insert(&mut self, element: T, priority: i64) -> Result<(), QueueError<T>> {
    if self.is_full() {
      return Err(QueueError::Overflow(element));
    }
    self.storage.insert(element, priority);
    Ok(())
  }
}

impl<T, S: QueueSignal> QueueState<T, S> {
  /// Inserts an element and fires one signal.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Overflow`] carrying the element when the queue is full; the queue is
  /// left unchanged and no signal fires.
  pub fn enqueue(&mut self, element: T, priority: i64) -> Result<(), QueueError<T>> {
    self.insert(element, priority)?;
    self.notify();
    Ok(())
  }

  /// Inserts elements in iteration order and fires one signal if anything was inserted.
  ///
  /// # Errors
  ///
  /// Returns [`BatchError::Overflow`] at the first element that does not fit. Elements inserted
  /// before it stay queued; the rejected element and all remaining ones are handed back.
  pub fn enqueue_multiple<I>(&mut self, items: I) -> Result<(), BatchError<T>>
  where
    I: IntoIterator<Item = (T, i64)>, {
    let mut items = items.into_iter();
    let mut inserted = 0_usize;
    let result = loop {
      let Some((element, priority)) = items.next() else {
        break Ok(());
      };
      if self.is_full() {
        let mut rejected = Vec::with_capacity(1 + items.size_hint().0);
        rejected.push(element);
        rejected.extend(items.by_ref().map(|(element, _)| element));
        break Err(BatchError::Overflow { inserted, rejected });
      }
      self.storage.insert(element, priority);
      inserted += 1;
    };
    if inserted > 0 {
      self.notify();
    }
    result
  }

  /// Removes every element and returns them head to tail. Pending signals are discarded.
  pub fn flush(&mut self) -> Vec<Container<T>> {
    let drained = self.storage.drain();
    if let Some(signal) = &self.signal {
      signal.clear();
    }
    drained
  }

  /// Flushes the queue and changes its capacity to `new_size` (at least one).
  ///
  /// Returns the flushed containers. A closed queue stays closed and returns nothing. The signal
  /// keeps the buffer it was created with, so after growing the queue fewer notifications than
  /// queued elements may be pending.
  pub fn resize(&mut self, new_size: usize) -> Vec<Container<T>> {
    if self.closed {
      return Vec::new();
    }
    let drained = self.flush();
    self.size = normalize_size(new_size);
    drained
  }

  /// Discards pending notifications, releases the signal, drops every element and sets the
  /// capacity to zero.
  ///
  /// Returns `false` when the state was already closed.
  pub fn close(&mut self) -> bool {
    if self.closed {
      return false;
    }
    if let Some(signal) = self.signal.take() {
      signal.clear();
    }
    self.storage.clear();
    self.size = 0;
    self.closed = true;
    true
  }

  fn notify(&self) {
    if let Some(signal) = &self.signal {
      signal.notify();
    }
  }
}
