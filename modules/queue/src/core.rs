//! Runtime-agnostic queue primitives built on `alloc` only.

/// Storage, ordering and the overflow/underflow protocol.
pub mod queue;
/// Mutex abstraction used to serialise queue state transitions.
pub mod sync;
