//! # LATTICE Shared
//!
//! Pure value types used across the workspace.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER contain:
//! - Containers or allocators (those live in `lattice_core`)
//! - Clocks or schedulers (those live in `lattice`)
//! - Anything with mutable process-wide state
//!
//! Everything here is a stateless function or a `Copy` value type.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod checksum;
pub mod math;

pub use checksum::{checksum, checksum_ignore_case};
pub use math::{Aabb, Mat2, Vec2};
