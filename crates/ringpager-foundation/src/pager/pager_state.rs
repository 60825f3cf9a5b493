//! Circular pager state management.
//!
//! Provides [`CircularPager`], the state machine that maps an endless ring
//! of pages onto three recycled slots and keeps the scroll surface
//! recentered between transitions.

use std::rc::Rc;

use ringpager_core::{circular_index, index_delta, PageIndexSet, Point};

use super::content_provider::{PageContentProvider, SlotRole};
use super::observer::PagerObserver;
use super::prefetch::PrefetchScheduler;
use super::scroll::ScrollSurface;
use super::scroll_detection::{
    center_offset, detect_page_delta, is_centered, virtual_offset, PageDirection,
};
use super::slot_window::{SlotWindow, SLOT_COUNT};
use super::spec::PagerSpec;

/// Lifecycle phase of a [`CircularPager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerPhase {
    /// No content loaded: no provider, no pages, or no surface yet.
    Unattached,
    /// Slots are populated for this page and the offset is centered.
    Settled(usize),
    /// A gesture has moved the offset off-center. Slots still show `from`.
    Transitioning { from: usize },
}

/// Counters describing what the pager has done.
///
/// Used for testing and debugging transition behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PagerStats {
    /// Successful slot populations, including reloads.
    pub populations: usize,

    /// Page index changes caused by scrolling or explicit jumps.
    pub transitions: usize,

    /// Silent offset writes back to the center.
    pub recenters: usize,

    /// Content objects installed into slots.
    pub contents_installed: usize,
}

/// Windowed circular paginator.
///
/// Presents `page_count` pages as an endless ring through three slots.
/// The host forwards every scroll notification to
/// [`on_scroll_changed`](Self::on_scroll_changed); when the offset crosses
/// a page threshold the pager advances the index (wrapping), repopulates
/// the slots, silently recenters the surface and notifies observers.
///
/// # Example
///
/// ```rust,ignore
/// let scroll_state = PagerScrollState::new(390.0);
/// let mut pager = CircularPager::new(PagerSpec::default());
/// pager.attach_surface(scroll_state.clone());
/// pager.set_provider(Rc::new(PhotoPages::new(photos)));
///
/// // A full swipe to the left
/// scroll_state.scroll_by(390.0);
/// for _ in 0..scroll_state.take_pending_notifications() {
///     pager.on_scroll_changed();
/// }
/// assert_eq!(pager.current_page_index(), 1);
/// ```
pub struct CircularPager<C> {
    spec: PagerSpec,

    /// Index of the centered page. Only this type mutates it.
    current_page_index: usize,

    phase: PagerPhase,

    provider: Option<Rc<dyn PageContentProvider<Content = C>>>,

    surface: Option<Box<dyn ScrollSurface>>,

    /// Allocated on first surface attachment, then reused forever.
    slots: Option<SlotWindow<C>>,

    observers: Vec<(u64, Box<dyn PagerObserver>)>,
    next_observer_id: u64,

    prefetch: PrefetchScheduler,

    stats: PagerStats,
}

impl<C: 'static> CircularPager<C> {
    /// Creates an unattached pager.
    pub fn new(spec: PagerSpec) -> Self {
        let prefetch = PrefetchScheduler::with_strategy(spec.prefetch.clone());
        Self {
            spec,
            current_page_index: 0,
            phase: PagerPhase::Unattached,
            provider: None,
            surface: None,
            slots: None,
            observers: Vec::new(),
            next_observer_id: 1,
            prefetch,
            stats: PagerStats::default(),
        }
    }

    pub fn spec(&self) -> &PagerSpec {
        &self.spec
    }

    pub fn phase(&self) -> PagerPhase {
        self.phase
    }

    /// Returns the index of the centered page.
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    pub fn stats(&self) -> &PagerStats {
        &self.stats
    }

    /// The prefetch set reported with the last page change.
    pub fn prefetch_hint(&self) -> &PageIndexSet {
        self.prefetch.last_hint()
    }

    /// Queries the provider for the current page count.
    ///
    /// Returns 0 without a provider. Never cached.
    pub fn page_count(&self) -> usize {
        self.provider
            .as_ref()
            .map(|provider| provider.page_count())
            .unwrap_or(0)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn is_surface_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the slot window, once a surface has been attached.
    pub fn slots(&self) -> Option<&SlotWindow<C>> {
        self.slots.as_ref()
    }

    /// Page index shown in each slot, left to right.
    pub fn slot_indices(&self) -> [Option<usize>; SLOT_COUNT] {
        self.slots
            .as_ref()
            .map(SlotWindow::page_indices)
            .unwrap_or([None; SLOT_COUNT])
    }

    /// Content installed in the slot with the given role.
    pub fn slot_content(&self, role: SlotRole) -> Option<&C> {
        self.slots.as_ref()?.slot(role).content()
    }

    /// Registers an observer, returning an id for [`remove_observer`](Self::remove_observer).
    pub fn add_observer(&mut self, observer: Box<dyn PagerObserver>) -> u64 {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns `false` if the id is unknown.
    pub fn remove_observer(&mut self, id: u64) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Attaches the host scroll surface.
    ///
    /// The slots are allocated on the first attachment and kept across
    /// later ones. If a provider is already attached, the pending page is
    /// loaded and the surface recentered.
    pub fn attach_surface<S: ScrollSurface + 'static>(&mut self, surface: S) {
        if self.slots.is_none() {
            self.slots = Some(SlotWindow::new());
            log::debug!("CircularPager: allocated {} page slots", SLOT_COUNT);
        }
        self.surface = Some(Box::new(surface));

        if self.provider.is_some() && self.load_page_at_index(self.current_page_index) {
            self.recenter_scroll_offset();
        }
    }

    /// Detaches the scroll surface, returning it.
    ///
    /// Slot contents stay installed. Operations that need a surface become
    /// no-ops until one is attached again.
    pub fn detach_surface(&mut self) -> Option<Box<dyn ScrollSurface>> {
        self.phase = PagerPhase::Unattached;
        self.surface.take()
    }

    /// Attaches a content provider and loads its first page.
    ///
    /// Content from a previous provider is handed back to it first.
    pub fn set_provider<P>(&mut self, provider: Rc<P>)
    where
        P: PageContentProvider<Content = C> + 'static,
    {
        self.release_slots();
        self.provider = Some(provider);
        self.current_page_index = 0;
        self.phase = PagerPhase::Unattached;

        if self.load_page_at_index(0) {
            self.recenter_scroll_offset();
        }
    }

    /// Detaches the provider, emptying every slot.
    pub fn detach_provider(&mut self) {
        self.release_slots();
        self.provider = None;
        self.current_page_index = 0;
        self.phase = PagerPhase::Unattached;
    }

    /// Makes `index` the current page and repopulates all three slots.
    ///
    /// No-op (returning `false`) without a provider, with zero pages, or
    /// with an out-of-range index. Without a surface the index is
    /// remembered and loaded on attachment. Does not recenter, so the
    /// phase stays [`PagerPhase::Transitioning`] while the surface is
    /// off-center.
    pub fn load_page_at_index(&mut self, index: usize) -> bool {
        let Some(provider) = self.provider.clone() else {
            log::debug!("CircularPager: load of page {} ignored, no content provider", index);
            return false;
        };
        let page_count = provider.page_count();
        if page_count == 0 {
            log::debug!("CircularPager: load of page {} ignored, provider has no pages", index);
            return false;
        }
        if index >= page_count {
            log::warn!(
                "CircularPager: page {} is out of range for {} pages",
                index,
                page_count
            );
            return false;
        }
        let (Some(slots), true) = (self.slots.as_mut(), self.surface.is_some()) else {
            log::debug!("CircularPager: no surface attached, page {} deferred", index);
            self.current_page_index = index;
            return false;
        };
        let Some(indices) = slots.populate(index, page_count, provider.as_ref()) else {
            return false;
        };

        self.current_page_index = index;
        self.phase = match self.surface.as_ref() {
            Some(surface)
                if surface.viewport_width() > 0.0
                    && !is_centered(surface.offset(), surface.viewport_width()) =>
            {
                PagerPhase::Transitioning { from: index }
            }
            _ => PagerPhase::Settled(index),
        };
        self.stats.populations += 1;
        self.stats.contents_installed += SLOT_COUNT;
        log::debug!(
            "CircularPager: showing page {} of {}, slots {:?}",
            index,
            page_count,
            indices
        );

        let scroll_enabled = !(self.spec.disable_scroll_on_single_page && page_count == 1);
        if let Some(surface) = self.surface.as_mut() {
            surface.set_scroll_enabled(scroll_enabled);
        }

        self.notify(|observer| observer.on_page_changed(index));
        if let Some(hint) = self.prefetch.update(index, page_count) {
            let hint = hint.clone();
            self.notify(|observer| observer.on_prefetch_hint(&hint));
        }
        true
    }

    /// Moves the surface back to the center slot without a scroll
    /// notification, settling on the current page.
    pub fn recenter_scroll_offset(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let width = surface.viewport_width();
        if width <= 0.0 {
            log::debug!("CircularPager: recenter skipped, surface has no width");
            return;
        }
        surface.set_offset_silently(center_offset(width));
        self.stats.recenters += 1;
        if let PagerPhase::Transitioning { .. } = self.phase {
            self.phase = PagerPhase::Settled(self.current_page_index);
        }
    }

    /// Handles one scroll notification from the surface.
    ///
    /// Within the band between the thresholds nothing but the phase
    /// changes. On a crossing the page advances by one (wrapping), the
    /// slots are repopulated and the surface recentered. Observers get
    /// the virtual scroll position either way.
    pub fn on_scroll_changed(&mut self) {
        let Some((offset, width)) = self
            .surface
            .as_ref()
            .map(|surface| (surface.offset(), surface.viewport_width()))
        else {
            return;
        };
        if self.phase == PagerPhase::Unattached {
            log::trace!("CircularPager: scroll ignored, no page loaded");
            return;
        }
        let page_count = self.page_count();
        if page_count == 0 {
            log::debug!("CircularPager: scroll ignored, provider has no pages");
            return;
        }

        let from = self.current_page_index;
        match detect_page_delta(offset, width) {
            Some(direction) => {
                self.phase = PagerPhase::Transitioning { from };
                self.transition_by(direction.delta(), page_count);
            }
            None if is_centered(offset, width) => self.phase = PagerPhase::Settled(from),
            None => self.phase = PagerPhase::Transitioning { from },
        }

        if let Some(position) = self.virtual_position() {
            self.notify(|observer| observer.on_scroll_to(position));
        }
    }

    /// Jumps directly to `index`.
    ///
    /// Requesting the current index does nothing at all. Otherwise behaves
    /// like a scroll transition of whatever size the jump needs. If the
    /// provider shrank below the current page without a reload, `index` is
    /// loaded directly.
    pub fn set_current_page_index(&mut self, index: usize) {
        if index == self.current_page_index {
            return;
        }
        let page_count = self.page_count();
        if page_count == 0 {
            log::debug!("CircularPager: jump to {} ignored, no pages", index);
            return;
        }
        if index >= page_count {
            log::warn!(
                "CircularPager: jump to {} ignored, only {} pages",
                index,
                page_count
            );
            return;
        }
        if self.current_page_index >= page_count {
            log::debug!(
                "CircularPager: page {} gone ({} pages), loading {} directly",
                self.current_page_index,
                page_count,
                index
            );
            self.settle_on(index);
            return;
        }
        self.transition_by(index_delta(self.current_page_index, index), page_count);
    }

    /// Advances one page forward, as a full swipe would.
    pub fn scroll_to_next_page(&mut self) {
        self.step(PageDirection::Forward);
    }

    /// Retreats one page, as a full swipe back would.
    pub fn scroll_to_previous_page(&mut self) {
        self.step(PageDirection::Backward);
    }

    /// Re-reads the page count and repopulates the slots.
    ///
    /// Resets to page 0 if the current page no longer exists. Recenters
    /// only when this is the first successful load.
    pub fn reload(&mut self) -> bool {
        if self.provider.is_none() {
            log::debug!("CircularPager: reload ignored, no content provider");
            return false;
        }
        let page_count = self.page_count();
        if page_count == 0 {
            log::debug!("CircularPager: reload ignored, provider has no pages");
            return false;
        }
        if self.current_page_index >= page_count {
            log::debug!(
                "CircularPager: page {} gone after reload ({} pages), resetting to 0",
                self.current_page_index,
                page_count
            );
            self.current_page_index = 0;
        }

        let first_load = self.phase == PagerPhase::Unattached;
        let loaded = self.load_page_at_index(self.current_page_index);
        if loaded && first_load {
            self.recenter_scroll_offset();
        }
        loaded
    }

    /// Recenters after the host resized the viewport.
    ///
    /// Ignored mid-gesture; the next settle recenters anyway.
    pub fn on_viewport_resized(&mut self) {
        if let PagerPhase::Settled(_) = self.phase {
            self.recenter_scroll_offset();
        }
    }

    /// Forwards a tap on the current slot to observers.
    pub fn perform_tap(&mut self) {
        let index = match self.phase {
            PagerPhase::Settled(index) | PagerPhase::Transitioning { from: index } => index,
            PagerPhase::Unattached => {
                log::debug!("CircularPager: tap ignored, no page loaded");
                return;
            }
        };
        self.notify(|observer| observer.on_page_tapped(index));
    }

    /// Current scroll position in the unbounded virtual coordinate space.
    pub fn virtual_position(&self) -> Option<Point> {
        if self.phase == PagerPhase::Unattached {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let page_count = self.page_count();
        if page_count == 0 {
            return None;
        }
        let x = virtual_offset(
            surface.offset(),
            surface.viewport_width(),
            self.current_page_index,
            page_count,
        );
        Some(Point::new(x, surface.cross_axis_offset()))
    }

    fn step(&mut self, direction: PageDirection) {
        if self.phase == PagerPhase::Unattached {
            log::debug!("CircularPager: {:?} step ignored, no page loaded", direction);
            return;
        }
        let page_count = self.page_count();
        if page_count == 0 {
            return;
        }
        self.transition_by(direction.delta(), page_count);
    }

    /// Shared transition path for scroll crossings, steps and jumps.
    fn transition_by(&mut self, delta: isize, page_count: usize) {
        let from = self.current_page_index;
        match circular_index(from, delta, page_count) {
            Some(next) if next != from => self.settle_on(next),
            Some(_) => {
                log::debug!("CircularPager: single page, snapping back to {}", from);
                self.recenter_scroll_offset();
            }
            None => {
                log::warn!(
                    "CircularPager: page {} invalid for {} pages, provider changed without reload",
                    from,
                    page_count
                );
                self.reload();
                self.recenter_scroll_offset();
            }
        }
    }

    /// Loads `next` as a transition and recenters.
    fn settle_on(&mut self, next: usize) {
        let from = self.current_page_index;
        if self.load_page_at_index(next) {
            self.stats.transitions += 1;
            log::debug!("CircularPager: page {} -> {}", from, next);
        }
        self.recenter_scroll_offset();
    }

    fn release_slots(&mut self) {
        if let (Some(slots), Some(provider)) = (self.slots.as_mut(), self.provider.as_ref()) {
            slots.clear_all(provider.as_ref());
        }
    }

    fn notify(&mut self, mut f: impl FnMut(&mut dyn PagerObserver)) {
        for (_, observer) in self.observers.iter_mut() {
            f(observer.as_mut());
        }
    }
}

impl<C: 'static> Default for CircularPager<C> {
    fn default() -> Self {
        Self::new(PagerSpec::default())
    }
}

impl<C> std::fmt::Debug for CircularPager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CircularPager")
            .field("spec", &self.spec)
            .field("current_page_index", &self.current_page_index)
            .field("phase", &self.phase)
            .field("has_provider", &self.provider.is_some())
            .field("has_surface", &self.surface.is_some())
            .field("observers", &self.observers.len())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::scroll::PagerScrollState;
    use std::cell::{Cell, RefCell};

    struct Numbers {
        count: Cell<usize>,
    }

    impl PageContentProvider for Numbers {
        type Content = usize;

        fn page_count(&self) -> usize {
            self.count.get()
        }

        fn content_for_page(&self, index: usize, _role: SlotRole) -> usize {
            index
        }
    }

    fn numbers(count: usize) -> Rc<Numbers> {
        Rc::new(Numbers {
            count: Cell::new(count),
        })
    }

    type Changes = Rc<RefCell<Vec<usize>>>;

    fn attached(count: usize) -> (CircularPager<usize>, PagerScrollState, Changes) {
        let scroll_state = PagerScrollState::new(100.0);
        let mut pager = CircularPager::new(PagerSpec::default());
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        pager.add_observer(Box::new(
            crate::pager::observer::FnObserver::default()
                .page_changed(move |index| sink.borrow_mut().push(index)),
        ));
        pager.attach_surface(scroll_state.clone());
        pager.set_provider(numbers(count));
        (pager, scroll_state, changes)
    }

    fn pump(pager: &mut CircularPager<usize>, scroll_state: &PagerScrollState) {
        for _ in 0..scroll_state.take_pending_notifications() {
            pager.on_scroll_changed();
        }
    }

    #[test]
    fn test_initial_state() {
        let pager = CircularPager::<usize>::default();
        assert_eq!(pager.phase(), PagerPhase::Unattached);
        assert_eq!(pager.current_page_index(), 0);
        assert_eq!(pager.page_count(), 0);
        assert_eq!(pager.slot_indices(), [None, None, None]);
    }

    #[test]
    fn test_first_load_populates_and_centers() {
        let (pager, scroll_state, changes) = attached(5);

        assert_eq!(pager.phase(), PagerPhase::Settled(0));
        assert_eq!(pager.slot_indices(), [Some(4), Some(0), Some(1)]);
        assert_eq!(scroll_state.value(), 100.0);
        assert_eq!(*changes.borrow(), vec![0]);
        assert_eq!(scroll_state.notification_count(), 0);
    }

    #[test]
    fn test_provider_before_surface_defers_load() {
        let scroll_state = PagerScrollState::new(100.0);
        let mut pager = CircularPager::new(PagerSpec::default());
        pager.set_provider(numbers(4));
        assert_eq!(pager.phase(), PagerPhase::Unattached);
        assert_eq!(pager.stats().populations, 0);

        pager.attach_surface(scroll_state.clone());
        assert_eq!(pager.phase(), PagerPhase::Settled(0));
        assert_eq!(scroll_state.value(), 100.0);
    }

    #[test]
    fn test_forward_crossing_wraps() {
        let (mut pager, scroll_state, changes) = attached(3);
        pager.set_current_page_index(2);

        scroll_state.scroll_by(100.0);
        pump(&mut pager, &scroll_state);

        assert_eq!(pager.current_page_index(), 0);
        assert_eq!(*changes.borrow(), vec![0, 2, 0]);
        assert_eq!(scroll_state.value(), 100.0);
    }

    #[test]
    fn test_partial_drag_is_transitioning() {
        let (mut pager, scroll_state, changes) = attached(3);

        scroll_state.scroll_by(40.0);
        pump(&mut pager, &scroll_state);
        assert_eq!(pager.phase(), PagerPhase::Transitioning { from: 0 });

        scroll_state.scroll_by(-40.0);
        pump(&mut pager, &scroll_state);
        assert_eq!(pager.phase(), PagerPhase::Settled(0));
        assert_eq!(*changes.borrow(), vec![0]);
    }

    #[test]
    fn test_set_same_index_has_no_side_effects() {
        let (mut pager, scroll_state, changes) = attached(3);
        let stats = pager.stats().clone();

        pager.set_current_page_index(0);

        assert_eq!(pager.stats(), &stats);
        assert_eq!(*changes.borrow(), vec![0]);
        assert_eq!(scroll_state.silent_write_count(), 1);
    }

    #[test]
    fn test_out_of_range_jump_is_ignored() {
        let (mut pager, _scroll_state, changes) = attached(3);
        pager.set_current_page_index(3);
        assert_eq!(pager.current_page_index(), 0);
        assert_eq!(*changes.borrow(), vec![0]);
    }

    #[test]
    fn test_zero_pages_is_a_no_op() {
        let (mut pager, scroll_state, changes) = attached(0);

        assert_eq!(pager.phase(), PagerPhase::Unattached);
        assert!(!pager.reload());
        pager.scroll_to_next_page();
        scroll_state.scroll_by(100.0);
        pump(&mut pager, &scroll_state);

        assert_eq!(pager.current_page_index(), 0);
        assert!(changes.borrow().is_empty());
        assert_eq!(pager.slot_indices(), [None, None, None]);
    }

    #[test]
    fn test_shrunk_provider_recovers_on_scroll() {
        let provider = numbers(5);
        let scroll_state = PagerScrollState::new(100.0);
        let mut pager = CircularPager::new(PagerSpec::default());
        pager.attach_surface(scroll_state.clone());
        pager.set_provider(provider.clone());
        pager.set_current_page_index(4);

        provider.count.set(2);
        scroll_state.scroll_by(100.0);
        pump(&mut pager, &scroll_state);

        assert_eq!(pager.current_page_index(), 0);
        assert_eq!(pager.slot_indices(), [Some(1), Some(0), Some(1)]);
        assert_eq!(scroll_state.value(), 100.0);
    }

    #[test]
    fn test_reload_off_center_keeps_transitioning() {
        let (mut pager, scroll_state, _changes) = attached(4);
        scroll_state.scroll_by(-30.0);
        pump(&mut pager, &scroll_state);

        assert!(pager.reload());
        assert_eq!(pager.phase(), PagerPhase::Transitioning { from: 0 });
        assert_eq!(scroll_state.value(), 70.0);
    }

    #[test]
    fn test_detach_provider_empties_slots() {
        let (mut pager, _scroll_state, _changes) = attached(3);
        pager.detach_provider();

        assert!(!pager.has_provider());
        assert_eq!(pager.phase(), PagerPhase::Unattached);
        assert_eq!(pager.slot_indices(), [None, None, None]);
    }

    #[test]
    fn test_remove_observer() {
        let (mut pager, _scroll_state, changes) = attached(3);
        assert!(pager.remove_observer(1));
        assert!(!pager.remove_observer(1));

        pager.scroll_to_next_page();
        assert_eq!(*changes.borrow(), vec![0]);
        assert_eq!(pager.current_page_index(), 1);
    }
}
