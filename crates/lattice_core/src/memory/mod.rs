//! # Memory Management
//!
//! Pre-allocated containers for zero-allocation steady state.
//!
//! ## Design Philosophy
//!
//! All memory is allocated once at construction. Afterwards:
//! - No heap allocations
//! - No reallocation or element moves between buffers
//! - Predictable, flat latency

mod bounded;
mod pool;

pub use bounded::BoundedArray;
pub use pool::{CursorMut, SlotHandle, SlotIter, SlotPool};
