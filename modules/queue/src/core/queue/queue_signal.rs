/// Notification hook fired after successful insertions.
///
/// Signals are advisory and level-triggered: a notification only says that work may be pending.
/// Implementations must never block the producer, so a notification that cannot be buffered is
/// dropped, and consumers always re-check the queue after waking.
pub trait QueueSignal {
  /// Attempts a non-blocking notification. Returns `false` when it was dropped.
  fn notify(&self) -> bool;

  /// Discards notifications that are still pending.
  fn clear(&self);
}
