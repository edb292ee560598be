#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::len_without_is_empty)]
#![cfg_attr(not(test), no_std)]

//! Bounded in-memory queue with FIFO and priority ordering.
//!
//! The queue never grows past its configured size: insertions beyond capacity are rejected with
//! an overflow error that hands the element back, and removals from an empty queue report an
//! underflow instead of blocking. Every insertion can additionally fire an advisory, drop-if-full
//! notification so that consumers may wait for work instead of polling.
//!
//! [`core`](crate::core) holds the allocation-only state machine and is usable without `std`. The `std`
//! module (enabled by the default `std` feature) provides the mutex and channel backed
//! `BoundedQueue` facade most callers construct.

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
pub mod std;

pub use crate::core::{
  queue::{
    BatchError, Container, DEFAULT_PRIORITY, DEFAULT_SIZE, MIN_SIZE, QueueConfig, QueueError, QueueSignal, QueueState,
  },
  sync::{SpinSyncMutex, SyncMutexLike},
};
#[cfg(feature = "std")]
pub use crate::std::{BoundedQueue, ChannelSignal, QUEUE_LOG_TARGET, SpinBoundedQueue, StdSyncMutex, StdSyncMutexGuard};
