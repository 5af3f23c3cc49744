//! # LATTICE Core
//!
//! Fixed-capacity containers for frame-driven simulation code:
//!
//! - [`SlotPool`]: a preallocated slot arena partitioned into one free
//!   list and N caller-defined used lists ("categories"), with O(1)
//!   allocation, release, and membership transfer via intrusive index
//!   links, and generational handles that detect stale use.
//! - [`BoundedArray`]: an ordered, capacity-bounded sequence with
//!   positional insert/remove and a hard no-reallocation guarantee.
//!
//! ## Architecture Rules
//!
//! 1. **All memory is allocated at construction** - capacities never grow
//! 2. **No silent failure** - capacity and bounds violations are typed errors
//! 3. **Single-threaded** - instances are not thread-safe; callers
//!    needing sharing must synchronize externally

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod memory;

pub use error::{CoreError, CoreResult};
pub use memory::{BoundedArray, CursorMut, SlotHandle, SlotIter, SlotPool};
