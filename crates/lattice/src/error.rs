//! # Scheduler Error Types
//!
//! All errors that can occur in the frame-scheduling layer.

use thiserror::Error;

/// Errors that can occur in the frame-scheduling layer.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SchedulerError {
    /// A timescale was zero, negative, or non-finite. The previous
    /// timescale stays in effect.
    #[error("invalid timescale: {0} (must be finite and > 0)")]
    InvalidTimescale(f64),

    /// A frame was driven, or the timescale changed, outside the
    /// `initialize()` .. `shutdown()` window.
    #[error("scheduler is not initialized")]
    NotInitialized,
}

/// Result type for scheduler operations.
pub type SchedulerResult<T> = Result<T, SchedulerError>;
