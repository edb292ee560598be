use alloc::{string::ToString, vec, vec::Vec};

use super::BatchError;

#[test]
fn overflow_returns_rejected_elements() {
  let error = BatchError::Overflow { inserted: 3, rejected: vec![4, 5] };
  assert!(error.is_overflow());
  assert_eq!(error.to_string(), "queue overflow after inserting 3 elements");
  assert_eq!(error.into_items(), vec![4, 5]);
}

#[test]
fn underflow_returns_collected_elements() {
  let error = BatchError::Underflow { collected: vec!["a", "b"] };
  assert!(error.is_underflow());
  assert_eq!(error.to_string(), "queue underflow after removing 2 elements");
  assert_eq!(error.into_items(), vec!["a", "b"]);
}

#[test]
fn underflow_with_nothing_collected() {
  let error: BatchError<u8> = BatchError::Underflow { collected: Vec::new() };
  assert!(error.into_items().is_empty());
}
