//! Recording doubles for the pager's collaborators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ringpager_core::collections::sorted_indices;
use ringpager_core::{PageIndexSet, Point};
use ringpager_foundation::{PageContentProvider, PagerObserver, SlotRole};

/// One observer callback, as recorded by [`RecordingObserver`].
#[derive(Clone, Debug, PartialEq)]
pub enum PagerEvent {
    ScrollTo(Point),
    PageChanged(usize),
    /// Prefetch hint, sorted ascending.
    PrefetchHint(Vec<usize>),
    PageTapped(usize),
}

/// Observer that records every callback.
///
/// Clones share the same log, so a test can keep one handle and give the
/// pager another.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<PagerEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PagerEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Indices reported through `on_page_changed`, in order.
    pub fn page_changes(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PagerEvent::PageChanged(index) => Some(*index),
                _ => None,
            })
            .collect()
    }

    /// Every prefetch hint reported, each sorted ascending.
    pub fn prefetch_hints(&self) -> Vec<Vec<usize>> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PagerEvent::PrefetchHint(indices) => Some(indices.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_prefetch_hint(&self) -> Option<Vec<usize>> {
        self.prefetch_hints().pop()
    }

    /// Virtual x positions reported through `on_scroll_to`, in order.
    pub fn scroll_positions(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PagerEvent::ScrollTo(point) => Some(point.x),
                _ => None,
            })
            .collect()
    }

    pub fn taps(&self) -> Vec<usize> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PagerEvent::PageTapped(index) => Some(*index),
                _ => None,
            })
            .collect()
    }
}

impl PagerObserver for RecordingObserver {
    fn on_scroll_to(&mut self, position: Point) {
        self.events.borrow_mut().push(PagerEvent::ScrollTo(position));
    }

    fn on_page_changed(&mut self, index: usize) {
        self.events.borrow_mut().push(PagerEvent::PageChanged(index));
    }

    fn on_prefetch_hint(&mut self, indices: &PageIndexSet) {
        self.events
            .borrow_mut()
            .push(PagerEvent::PrefetchHint(sorted_indices(indices)));
    }

    fn on_page_tapped(&mut self, index: usize) {
        self.events.borrow_mut().push(PagerEvent::PageTapped(index));
    }
}

/// Content produced by [`TestContentProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestPage {
    pub index: usize,
    pub role: SlotRole,
}

/// Provider with an adjustable page count that logs every fetch and
/// release.
#[derive(Debug, Default)]
pub struct TestContentProvider {
    page_count: Cell<usize>,
    fetches: RefCell<Vec<(usize, SlotRole)>>,
    releases: RefCell<Vec<usize>>,
}

impl TestContentProvider {
    pub fn new(page_count: usize) -> Rc<Self> {
        Rc::new(Self {
            page_count: Cell::new(page_count),
            ..Default::default()
        })
    }

    /// Changes the page count reported from now on.
    pub fn set_page_count(&self, page_count: usize) {
        self.page_count.set(page_count);
    }

    pub fn fetches(&self) -> Vec<(usize, SlotRole)> {
        self.fetches.borrow().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.borrow().len()
    }

    pub fn releases(&self) -> Vec<usize> {
        self.releases.borrow().clone()
    }
}

impl PageContentProvider for TestContentProvider {
    type Content = TestPage;

    fn page_count(&self) -> usize {
        self.page_count.get()
    }

    fn content_for_page(&self, index: usize, role: SlotRole) -> TestPage {
        self.fetches.borrow_mut().push((index, role));
        TestPage { index, role }
    }

    fn release_content(&self, index: usize, content: TestPage) {
        debug_assert_eq!(index, content.index);
        self.releases.borrow_mut().push(index);
    }
}
