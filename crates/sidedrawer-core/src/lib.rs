//! Sidedrawer Core
//!
//! Shared building blocks for the sidedrawer crates: geometry, math re-exports,
//! hash collections, logging and profiling.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
