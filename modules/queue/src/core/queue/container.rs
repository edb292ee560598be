use core::cmp::Ordering;


/// Element stored in a queue together with its priority.
///
/// Containers rank by priority first (higher wins) and by insertion sequence second (older wins),
/// so the greatest container is always the queue head. Equality follows the same key and ignores
/// the element itself.
#[derive(Clone, Debug)]
pub struct Container<T> {
  element:  T,
  priority: i64,
  sequence: u64,
}

impl<T> Container<T> {
  pub(crate) const fn new(element: T, priority: i64, sequence: u64) -> Self {
    Self { element, priority, sequence }
  }

  /// Returns a reference to the stored element.
  #[must_use]
  pub const fn element(&self) -> &T {
    &self.element
  }

  /// Returns the priority the element was enqueued with.
  #[must_use]
  pub const fn priority(&self) -> i64 {
    self.priority
  }

  pub(crate) const fn sequence(&self) -> u64 {
    self.sequence
  }

  /// Consumes the container and returns the element.
  #[must_use]
  pub fn into_element(self) -> T {
    self.element
  }

  /// Consumes the container and returns the element with its priority.
  #[must_use]
  pub fn into_parts(self) -> (T, i64) {
    (self.element, self.priority)
  }
}

impl<T> PartialEq for Container<T> {
  fn eq(&self, other: &Self) -> bool {
    self.priority == other.priority && self.sequence == other.sequence
  }
}

impl<T> Eq for Container<T> {}

impl<T> PartialOrd for Container<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T> Ord for Container<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    match self.priority.cmp(&other.priority) {
      | Ordering::Equal => other.sequence.cmp(&self.sequence),
      | ord => ord,
    }
  }
}
