//! Hash set aliases.
//!
//! Page indices are small dense integers, so the Fx hasher is used unless
//! the `std-hash` feature asks for the standard SipHash set.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashSet;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashSet as HashSet;
}

/// Unordered set of logical page indices, as carried by prefetch hints.
pub type PageIndexSet = map::HashSet<usize>;

/// Returns the contents of `set` in ascending order.
///
/// Prefetch hints carry no ordering guarantee; this is for stable logging
/// and assertions.
pub fn sorted_indices(set: &PageIndexSet) -> Vec<usize> {
    let mut indices: Vec<usize> = set.iter().copied().collect();
    indices.sort_unstable();
    indices
}
