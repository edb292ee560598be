use alloc::{format, string::ToString};

use super::QueueError;

#[test]
fn overflow_hands_back_element() {
  let error = QueueError::Overflow(42);
  assert!(error.is_overflow());
  assert!(!error.is_underflow());
  assert_eq!(error.into_item(), Some(42));
}

#[test]
fn underflow_carries_nothing() {
  let error: QueueError<i32> = QueueError::Underflow;
  assert!(error.is_underflow());
  assert_eq!(error.into_item(), None);
}

#[test]
fn display_names_the_condition() {
  assert_eq!(QueueError::Overflow("x").to_string(), "queue overflow");
  assert_eq!(QueueError::<()>::Underflow.to_string(), "queue underflow");
}

#[test]
fn debug_includes_payload() {
  let debug_str = format!("{:?}", QueueError::Overflow(7));
  assert!(debug_str.contains("Overflow"));
  assert!(debug_str.contains('7'));
}
