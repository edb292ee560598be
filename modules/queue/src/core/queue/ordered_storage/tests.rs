use alloc::vec::Vec;

use super::OrderedStorage;

fn elements(storage: &OrderedStorage<u32>) -> Vec<u32> {
  storage.iter().map(|container| *container.element()).collect()
}

#[test]
fn equal_priorities_keep_arrival_order() {
  let mut storage = OrderedStorage::with_capacity(3);
  storage.insert(1, 0);
  storage.insert(2, 0);
  storage.insert(3, 0);
  assert_eq!(elements(&storage), [1, 2, 3]);
}

#[test]
fn higher_priority_moves_towards_head() {
  let mut storage = OrderedStorage::with_capacity(3);
  storage.insert(1, 10);
  storage.insert(2, 0);
  storage.insert(3, 100);
  assert_eq!(elements(&storage), [3, 1, 2]);
  assert_eq!(storage.head().map(|c| c.priority()), Some(100));
  assert_eq!(storage.tail().map(|c| c.priority()), Some(0));
}

#[test]
fn ties_are_placed_behind_existing_equal_priorities() {
  let mut storage = OrderedStorage::with_capacity(5);
  storage.insert(1, 5);
  storage.insert(2, -1);
  storage.insert(3, 5);
  storage.insert(4, -1);
  storage.insert(5, 7);
  assert_eq!(elements(&storage), [5, 1, 3, 2, 4]);
}

#[test]
fn pop_head_follows_ordering() {
  let mut storage = OrderedStorage::with_capacity(2);
  storage.insert(1, 1);
  storage.insert(2, 2);
  assert_eq!(storage.pop_head().map(|c| c.into_parts()), Some((2, 2)));
  assert_eq!(storage.pop_head().map(|c| c.into_parts()), Some((1, 1)));
  assert!(storage.pop_head().is_none());
  assert!(storage.is_empty());
}

#[test]
fn drain_empties_storage_in_order() {
  let mut storage = OrderedStorage::with_capacity(3);
  storage.insert(1, 0);
  storage.insert(2, 9);
  let drained: Vec<(u32, i64)> = storage.drain().into_iter().map(|c| c.into_parts()).collect();
  assert_eq!(drained, [(2, 9), (1, 0)]);
  assert_eq!(storage.len(), 0);
}

#[test]
fn clear_drops_everything() {
  let mut storage = OrderedStorage::with_capacity(2);
  storage.insert(1, 0);
  storage.clear();
  assert!(storage.head().is_none());
  assert!(storage.tail().is_none());
}
