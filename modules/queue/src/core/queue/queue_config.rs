use super::{DEFAULT_SIZE, normalize_size};


/// Construction parameters for a bounded queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueConfig {
  size:    usize,
  polling: bool,
}

impl QueueConfig {
  /// Creates a signalling configuration with the given capacity.
  ///
  /// A capacity of `0` is coerced to [`MIN_SIZE`](super::MIN_SIZE).
  #[must_use]
  pub const fn new(size: usize) -> Self {
    Self { size: normalize_size(size), polling: false }
  }

  /// Overrides the capacity, applying the same coercion as [`QueueConfig::new`].
  #[must_use]
  pub const fn with_size(mut self, size: usize) -> Self {
    self.size = normalize_size(size);
    self
  }

  /// Selects polling mode, in which no insertion signal is ever created or sent.
  #[must_use]
  pub const fn with_polling(mut self, polling: bool) -> Self {
    self.polling = polling;
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.size
  }

  /// Returns `true` when polling mode is selected.
  #[must_use]
  pub const fn polling(&self) -> bool {
    self.polling
  }
}

impl Default for QueueConfig {
  fn default() -> Self {
    Self::new(DEFAULT_SIZE)
  }
}
