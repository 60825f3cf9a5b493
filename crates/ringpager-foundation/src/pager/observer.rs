use std::cell::RefCell;
use std::rc::Rc;

use ringpager_core::{PageIndexSet, Point};

/// Receives notifications from a [`CircularPager`](super::CircularPager).
///
/// Every method has an empty default so observers only implement what they
/// care about.
pub trait PagerObserver {
    /// Called on every raw scroll update with the position translated into
    /// the unbounded virtual coordinate space.
    fn on_scroll_to(&mut self, position: Point) {
        let _ = position;
    }

    /// Called once per settled page change, including the initial load.
    fn on_page_changed(&mut self, index: usize) {
        let _ = index;
    }

    /// Called once per settled page change with the pages worth warming.
    fn on_prefetch_hint(&mut self, indices: &PageIndexSet) {
        let _ = indices;
    }

    /// Called when the current slot is tapped.
    fn on_page_tapped(&mut self, index: usize) {
        let _ = index;
    }
}

impl<T: PagerObserver + ?Sized> PagerObserver for Rc<RefCell<T>> {
    fn on_scroll_to(&mut self, position: Point) {
        self.borrow_mut().on_scroll_to(position);
    }

    fn on_page_changed(&mut self, index: usize) {
        self.borrow_mut().on_page_changed(index);
    }

    fn on_prefetch_hint(&mut self, indices: &PageIndexSet) {
        self.borrow_mut().on_prefetch_hint(indices);
    }

    fn on_page_tapped(&mut self, index: usize) {
        self.borrow_mut().on_page_tapped(index);
    }
}

/// Observer built from closures.
///
/// # Example
///
/// ```rust,ignore
/// pager.add_observer(Box::new(
///     FnObserver::default().page_changed(|index| println!("now on {index}")),
/// ));
/// ```
#[derive(Default)]
pub struct FnObserver {
    scroll_to: Option<Box<dyn FnMut(Point)>>,
    page_changed: Option<Box<dyn FnMut(usize)>>,
    prefetch_hint: Option<Box<dyn FnMut(&PageIndexSet)>>,
    page_tapped: Option<Box<dyn FnMut(usize)>>,
}

impl FnObserver {
    pub fn scroll_to(mut self, f: impl FnMut(Point) + 'static) -> Self {
        self.scroll_to = Some(Box::new(f));
        self
    }

    pub fn page_changed(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.page_changed = Some(Box::new(f));
        self
    }

    pub fn prefetch_hint(mut self, f: impl FnMut(&PageIndexSet) + 'static) -> Self {
        self.prefetch_hint = Some(Box::new(f));
        self
    }

    pub fn page_tapped(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.page_tapped = Some(Box::new(f));
        self
    }
}

impl PagerObserver for FnObserver {
    fn on_scroll_to(&mut self, position: Point) {
        if let Some(f) = self.scroll_to.as_mut() {
            f(position);
        }
    }

    fn on_page_changed(&mut self, index: usize) {
        if let Some(f) = self.page_changed.as_mut() {
            f(index);
        }
    }

    fn on_prefetch_hint(&mut self, indices: &PageIndexSet) {
        if let Some(f) = self.prefetch_hint.as_mut() {
            f(indices);
        }
    }

    fn on_page_tapped(&mut self, index: usize) {
        if let Some(f) = self.page_tapped.as_mut() {
            f(index);
        }
    }
}

impl std::fmt::Debug for FnObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnObserver")
            .field("scroll_to", &self.scroll_to.is_some())
            .field("page_changed", &self.page_changed.is_some())
            .field("prefetch_hint", &self.prefetch_hint.is_some())
            .field("page_tapped", &self.page_tapped.is_some())
            .finish()
    }
}
