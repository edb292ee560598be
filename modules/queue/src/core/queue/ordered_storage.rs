use alloc::{collections::VecDeque, vec::Vec};

use super::Container;

#[cfg(test)]
mod tests;

/// Head-to-tail ordered sequence of containers.
///
/// New containers are placed behind every container that ranks at least as high, which keeps the
/// sequence sorted by descending priority with insertion order preserved among equal priorities.
/// Capacity is enforced by the caller.
#[derive(Debug)]
pub struct OrderedStorage<T> {
  containers:    VecDeque<Container<T>>,
  next_sequence: u64,
}

impl<T> OrderedStorage<T> {
  /// Creates empty storage with room for `capacity` containers.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { containers: VecDeque::with_capacity(capacity), next_sequence: 0 }
  }

  /// Returns the number of stored containers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.containers.len()
  }

  /// Indicates whether no container is stored.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.containers.is_empty()
  }

  /// Inserts an element at the position dictated by its priority.
  pub fn insert(&mut self, element: T, priority: i64) {
    let container = Container::new(element, priority, self.next_sequence);
    self.next_sequence = self.next_sequence.wrapping_add(1);
    let index = self.containers.partition_point(|existing| existing > &container);
    self.containers.insert(index, container);
  }

  /// Removes the head container.
  pub fn pop_head(&mut self) -> Option<Container<T>> {
    self.containers.pop_front()
  }

  /// Returns the head container.
  #[must_use]
  pub fn head(&self) -> Option<&Container<T>> {
    self.containers.front()
  }

  /// Returns the tail container.
  #[must_use]
  pub fn tail(&self) -> Option<&Container<T>> {
    self.containers.back()
  }

  /// Iterates head to tail.
  pub fn iter(&self) -> impl Iterator<Item = &Container<T>> {
    self.containers.iter()
  }

  /// Removes every container, returning them head to tail.
  pub fn drain(&mut self) -> Vec<Container<T>> {
    self.containers.drain(..).collect()
  }

  /// Drops every container and releases the backing allocation.
  pub fn clear(&mut self) {
    self.containers = VecDeque::new();
  }
}
