//! Prefetch hints for the circular pager.
//!
//! After every page change the pager reports the pages within a fixed
//! radius of the current one, so the provider can start warming content
//! before it is swiped into view.

use ringpager_core::{circular_index, PageIndexSet};

/// Default number of pages hinted on each side of the current page.
pub const DEFAULT_PREFETCH_RADIUS: usize = 3;

/// Strategy for prefetch hints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefetchStrategy {
    /// Number of pages hinted on each side of the current page.
    pub radius: usize,

    /// Whether hints are reported at all.
    pub enabled: bool,
}

impl Default for PrefetchStrategy {
    fn default() -> Self {
        Self {
            radius: DEFAULT_PREFETCH_RADIUS,
            enabled: true,
        }
    }
}

impl PrefetchStrategy {
    /// Creates a strategy hinting `radius` pages on each side.
    pub fn new(radius: usize) -> Self {
        Self {
            radius,
            enabled: true,
        }
    }

    /// Disables prefetch hints.
    pub fn disabled() -> Self {
        Self {
            radius: 0,
            enabled: false,
        }
    }
}

/// Computes the prefetch set around `current`.
///
/// Walks `-radius..=radius` through [`circular_index`], skipping every
/// offset whose wrapped index lands on `current` itself. Once `page_count`
/// is smaller than the radius the walk wraps onto pages it already visited
/// and duplicates collapse in the set. Returns an empty set if `current` is
/// not a valid index.
pub fn prefetch_indices(current: usize, page_count: usize, radius: usize) -> PageIndexSet {
    let mut indices = PageIndexSet::default();
    // Offsets beyond one full lap only revisit pages.
    let radius = radius.min(page_count).min(isize::MAX as usize) as isize;
    for delta in -radius..=radius {
        match circular_index(current, delta, page_count) {
            Some(index) if index != current => {
                indices.insert(index);
            }
            Some(_) => {}
            None => break,
        }
    }
    indices
}

/// Produces prefetch hints according to a [`PrefetchStrategy`].
///
/// Remembers the last hint so hosts can inspect it between transitions.
#[derive(Debug)]
pub struct PrefetchScheduler {
    strategy: PrefetchStrategy,
    last_hint: PageIndexSet,
}

impl PrefetchScheduler {
    pub fn with_strategy(strategy: PrefetchStrategy) -> Self {
        Self {
            strategy,
            last_hint: PageIndexSet::default(),
        }
    }

    /// Recomputes the hint for `current`.
    ///
    /// Returns `None` when the strategy is disabled; no hint should be
    /// reported in that case.
    pub fn update(&mut self, current: usize, page_count: usize) -> Option<&PageIndexSet> {
        if !self.strategy.enabled {
            self.last_hint.clear();
            return None;
        }
        self.last_hint = prefetch_indices(current, page_count, self.strategy.radius);
        Some(&self.last_hint)
    }

    /// The hint computed by the last [`update`](Self::update).
    pub fn last_hint(&self) -> &PageIndexSet {
        &self.last_hint
    }
}
