use alloc::vec::Vec;

#[cfg(test)]
mod tests;

/// Errors reported by batch operations that stop part-way.
///
/// Batches are not transactional. Elements inserted before an overflow stay queued, and elements
/// removed before an underflow are returned here instead of being lost.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError<T> {
  /// The queue filled up during a batch insertion.
  #[error("queue overflow after inserting {inserted} elements")]
  Overflow {
    /// Number of elements inserted before the overflow.
    inserted: usize,
    /// The element that did not fit followed by every element after it.
    rejected: Vec<T>,
  },
  /// The queue ran empty during a batch removal.
  #[error("queue underflow after removing {} elements", .collected.len())]
  Underflow {
    /// Elements removed before the queue ran empty, head first.
    collected: Vec<T>,
  },
}

impl<T> BatchError<T> {
  /// Returns `true` for [`BatchError::Overflow`].
  #[must_use]
  pub const fn is_overflow(&self) -> bool {
    matches!(self, Self::Overflow { .. })
  }

  /// Returns `true` for [`BatchError::Underflow`].
  #[must_use]
  pub const fn is_underflow(&self) -> bool {
    matches!(self, Self::Underflow { .. })
  }

  /// Extracts the rejected (overflow) or collected (underflow) elements.
  #[must_use]
  pub fn into_items(self) -> Vec<T> {
    match self {
      | Self::Overflow { rejected, .. } => rejected,
      | Self::Underflow { collected } => collected,
    }
  }
}
