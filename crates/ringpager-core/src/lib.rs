//! Core primitives for ringpager.
//!
//! Everything here is free of UI concerns: the circular index arithmetic
//! that every page transition routes through, a small geometry type for
//! reporting scroll positions, and the hash collection aliases used by the
//! rest of the workspace.

pub mod collections;
mod circular;
mod geometry;

pub use circular::*;
pub use collections::PageIndexSet;
pub use geometry::*;
