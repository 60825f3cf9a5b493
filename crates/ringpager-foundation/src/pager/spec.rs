use super::prefetch::PrefetchStrategy;

/// Configuration for a [`CircularPager`](super::CircularPager).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagerSpec {
    /// Disable user scrolling while the provider reports exactly one page.
    pub disable_scroll_on_single_page: bool,
    /// Which neighbouring pages are hinted after each page change.
    pub prefetch: PrefetchStrategy,
}

impl Default for PagerSpec {
    fn default() -> Self {
        Self {
            disable_scroll_on_single_page: false,
            prefetch: PrefetchStrategy::default(),
        }
    }
}

impl PagerSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable_scroll_on_single_page(mut self, disable: bool) -> Self {
        self.disable_scroll_on_single_page = disable;
        self
    }

    pub fn prefetch(mut self, strategy: PrefetchStrategy) -> Self {
        self.prefetch = strategy;
        self
    }

    /// Sets the prefetch radius, keeping hints enabled.
    pub fn prefetch_radius(mut self, radius: usize) -> Self {
        self.prefetch = PrefetchStrategy::new(radius);
        self
    }
}
