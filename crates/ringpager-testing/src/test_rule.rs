use std::rc::Rc;

use ringpager_foundation::{
    CircularPager, PageContentProvider, PagerScrollState, PagerSpec, ScrollSurface,
};

use crate::recording::{RecordingObserver, TestContentProvider, TestPage};

/// Upper bound on notification rounds in [`PagerTestRule::pump`]. A pager
/// that recenters silently settles in one round.
const MAX_PUMP_ROUNDS: usize = 16;

/// Drives a [`CircularPager`] the way a host event loop would.
///
/// Owns a [`PagerScrollState`] attached to the pager and a
/// [`RecordingObserver`] registered on it. Gestures move the scroll state
/// through its notifying entry point, then [`pump`](Self::pump) delivers the
/// queued notifications to the pager until none are left.
pub struct PagerTestRule<C: 'static = TestPage> {
    pager: CircularPager<C>,
    scroll_state: PagerScrollState,
    observer: RecordingObserver,
}

impl PagerTestRule<TestPage> {
    /// Creates a rule with a [`TestContentProvider`] of `page_count` pages
    /// already attached, returning the provider alongside.
    pub fn with_pages(
        viewport_width: f32,
        page_count: usize,
        spec: PagerSpec,
    ) -> (Self, Rc<TestContentProvider>) {
        let provider = TestContentProvider::new(page_count);
        let mut rule = Self::new(viewport_width, spec);
        rule.set_provider(provider.clone());
        (rule, provider)
    }
}

impl<C: 'static> PagerTestRule<C> {
    /// Creates a rule with an attached surface and no provider.
    pub fn new(viewport_width: f32, spec: PagerSpec) -> Self {
        let scroll_state = PagerScrollState::new(viewport_width);
        let observer = RecordingObserver::new();
        let mut pager = CircularPager::new(spec);
        pager.add_observer(Box::new(observer.clone()));
        pager.attach_surface(scroll_state.clone());
        Self {
            pager,
            scroll_state,
            observer,
        }
    }

    pub fn set_provider<P>(&mut self, provider: Rc<P>)
    where
        P: PageContentProvider<Content = C> + 'static,
    {
        self.pager.set_provider(provider);
    }

    pub fn pager(&self) -> &CircularPager<C> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut CircularPager<C> {
        &mut self.pager
    }

    pub fn scroll_state(&self) -> &PagerScrollState {
        &self.scroll_state
    }

    pub fn observer(&self) -> &RecordingObserver {
        &self.observer
    }

    pub fn viewport_width(&self) -> f32 {
        self.scroll_state.viewport_width()
    }

    /// Drags the content by `delta` pixels and delivers the resulting
    /// notifications. Positive deltas move toward the next page.
    pub fn drag_by(&mut self, delta: f32) -> f32 {
        let consumed = self.scroll_state.scroll_by(delta);
        self.pump();
        consumed
    }

    /// Drags through a gesture made of several moves, pumping after each.
    pub fn drag_steps(&mut self, deltas: &[f32]) {
        for delta in deltas {
            self.drag_by(*delta);
        }
    }

    /// A full-page swipe toward the next page.
    pub fn swipe_forward(&mut self) {
        let width = self.viewport_width();
        self.drag_by(width);
    }

    /// A full-page swipe toward the previous page.
    pub fn swipe_backward(&mut self) {
        let width = self.viewport_width();
        self.drag_by(-width);
    }

    /// Delivers queued scroll notifications until the surface is quiet.
    ///
    /// The queue holds a count, not offsets: every notification queued
    /// since the last pump is delivered against the surface's offset at
    /// pump time. Moves that must each be seen at their own offset go
    /// through [`drag_steps`](Self::drag_steps), which pumps after every
    /// move.
    ///
    /// Returns the number of notifications delivered. Panics if the pager
    /// keeps producing notifications, which means a recenter went through
    /// the notifying path.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        for _ in 0..MAX_PUMP_ROUNDS {
            let pending = self.scroll_state.take_pending_notifications();
            if pending == 0 {
                return delivered;
            }
            for _ in 0..pending {
                self.pager.on_scroll_changed();
            }
            delivered += pending;
        }
        panic!(
            "scroll notifications did not settle after {} rounds ({} delivered)",
            MAX_PUMP_ROUNDS, delivered
        );
    }

    /// Resizes the viewport and tells the pager about it.
    pub fn resize(&mut self, viewport_width: f32) {
        self.scroll_state.set_viewport_width(viewport_width);
        self.pager.on_viewport_resized();
    }

    /// Whether the surface currently sits on its neutral center offset.
    pub fn is_centered(&self) -> bool {
        ringpager_foundation::is_centered(self.scroll_state.value(), self.viewport_width())
    }
}

impl<C: 'static> std::fmt::Debug for PagerTestRule<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerTestRule")
            .field("pager", &self.pager)
            .field("scroll_state", &self.scroll_state)
            .finish()
    }
}
