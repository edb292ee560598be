use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};

use crate::core::queue::{QueueSignal, normalize_size};


/// Insertion signal backed by a bounded crossbeam channel.
///
/// Each notification is a `()` message pushed with `try_send`, so a full buffer drops it instead
/// of blocking the producer. Consumers obtain receivers through [`subscribe`](Self::subscribe) and
/// may combine them with other channels in `crossbeam_channel::select!`. Dropping the signal
/// disconnects every receiver.
#[derive(Debug)]
pub struct ChannelSignal {
  sender:   Sender<()>,
  receiver: Receiver<()>,
}

impl ChannelSignal {
  /// Creates a signal buffering up to `capacity` notifications (at least one).
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    let (sender, receiver) = bounded(normalize_size(capacity));
    Self { sender, receiver }
  }

  /// Returns a receiver observing this signal.
  #[must_use]
  pub fn subscribe(&self) -> Receiver<()> {
    self.receiver.clone()
  }

  /// Returns the number of buffered notifications.
  #[must_use]
  pub fn pending(&self) -> usize {
    self.receiver.len()
  }

  /// Returns the notification buffer capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.sender.capacity().unwrap_or_default()
  }
}

impl QueueSignal for ChannelSignal {
  fn notify(&self) -> bool {
    match self.sender.try_send(()) {
      | Ok(()) => true,
      | Err(TrySendError::Full(())) | Err(TrySendError::Disconnected(())) => false,
    }
  }

  fn clear(&self) {
    while self.receiver.try_recv().is_ok() {}
  }
}
