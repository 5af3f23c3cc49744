//! # Core Error Types
//!
//! All errors that can occur in the container layer.

use thiserror::Error;

/// Errors that can occur in the container layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A container was constructed with an unusable capacity.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(usize),

    /// An append or insert was attempted on a full container.
    #[error("capacity exceeded: all {capacity} elements in use")]
    CapacityExceeded {
        /// The fixed capacity of the container.
        capacity: usize,
    },

    /// An index (or category) was outside the valid range.
    #[error("index out of range: index {index}, len {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound at the time of the call.
        len: usize,
    },

    /// An allocation was attempted with no free slot available.
    #[error("pool exhausted: all {capacity} slots are live")]
    PoolExhausted {
        /// The fixed capacity of the pool.
        capacity: usize,
    },

    /// A release (or second release) was attempted through a handle
    /// whose slot is no longer live at that generation. Covers double
    /// frees, stale handles, and handles from another pool.
    #[error("double free: slot {index} is not live at generation {generation}")]
    DoubleFree {
        /// Slot index carried by the handle.
        index: u32,
        /// Generation carried by the handle.
        generation: u32,
    },
}

/// Result type for container operations.
pub type CoreResult<T> = Result<T, CoreError>;
