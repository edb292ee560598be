#[cfg(test)]
mod tests;

/// Errors reported by single-element queue operations.
///
/// Both variants are routine outcomes rather than failures of the queue itself: the caller decides
/// whether to retry, drop or escalate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError<T> {
  /// The queue is at capacity. Contains the rejected element.
  #[error("queue overflow")]
  Overflow(T),
  /// The queue holds no element to remove.
  #[error("queue underflow")]
  Underflow,
}

impl<T> QueueError<T> {
  /// Returns `true` for [`QueueError::Overflow`].
  #[must_use]
  pub const fn is_overflow(&self) -> bool {
    matches!(self, Self::Overflow(_))
  }

  /// Returns `true` for [`QueueError::Underflow`].
  #[must_use]
  pub const fn is_underflow(&self) -> bool {
    matches!(self, Self::Underflow)
  }

  /// Extracts the element carried by an overflow.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Overflow(item) => Some(item),
      | Self::Underflow => None,
    }
  }
}
