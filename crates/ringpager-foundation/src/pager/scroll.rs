//! Scroll surface abstraction.
//!
//! The host scroll widget is opaque to the pager: it reports a horizontal
//! offset and a viewport width, and accepts offset writes through two
//! separate entry points. [`ScrollSurface::scroll_to`] behaves like a user
//! or programmatic scroll and produces a scroll notification;
//! [`ScrollSurface::set_offset_silently`] moves the content without one.
//! The pager only ever uses the silent path, which is what keeps a
//! recenter from being observed as another scroll.

use std::cell::RefCell;
use std::rc::Rc;

use super::slot_window::SLOT_COUNT;

/// The host's horizontally scrolling widget.
pub trait ScrollSurface {
    /// Current horizontal content offset in pixels.
    fn offset(&self) -> f32;

    /// Current cross-axis offset in pixels. Horizontal pagers report 0.
    fn cross_axis_offset(&self) -> f32 {
        0.0
    }

    /// Width of one page, which is also the width of the viewport.
    fn viewport_width(&self) -> f32;

    /// Moves the content and reports it as a scroll.
    fn scroll_to(&mut self, offset: f32);

    /// Moves the content without producing a scroll notification.
    fn set_offset_silently(&mut self, offset: f32);

    /// Enables or disables user scrolling.
    fn set_scroll_enabled(&mut self, enabled: bool);

    fn is_scroll_enabled(&self) -> bool;
}

/// Internal state for [`PagerScrollState`].
#[derive(Debug)]
pub struct PagerScrollStateData {
    offset: f32,
    viewport_width: f32,
    /// Largest reachable offset: content width minus viewport width.
    max_value: f32,
    scroll_enabled: bool,
    /// Scroll notifications not yet delivered to the pager.
    pending_notifications: usize,
    /// Notifications produced over the state's lifetime.
    notification_count: usize,
    /// Offset writes that bypassed notification.
    silent_write_count: usize,
}

/// Default [`ScrollSurface`] implementation.
///
/// A cheap-to-clone handle over shared scroll state, for hosts that do not
/// have a native scroll widget and for tests. Content is always
/// [`SLOT_COUNT`] pages wide, so the offset is clamped to
/// `0..=(SLOT_COUNT - 1) * viewport_width`.
///
/// Notifying writes queue a pending notification that the host drains with
/// [`take_pending_notifications`](Self::take_pending_notifications),
/// calling `CircularPager::on_scroll_changed` once per notification.
#[derive(Clone, Debug)]
pub struct PagerScrollState {
    pub data: Rc<RefCell<PagerScrollStateData>>,
}

impl PagerScrollState {
    /// Creates a scroll state for pages `viewport_width` pixels wide.
    pub fn new(viewport_width: f32) -> Self {
        Self {
            data: Rc::new(RefCell::new(PagerScrollStateData {
                offset: 0.0,
                viewport_width: viewport_width.max(0.0),
                max_value: content_range(viewport_width),
                scroll_enabled: true,
                pending_notifications: 0,
                notification_count: 0,
                silent_write_count: 0,
            })),
        }
    }

    /// Current offset in pixels.
    pub fn value(&self) -> f32 {
        self.data.borrow().offset
    }

    /// Largest reachable offset.
    pub fn max_value(&self) -> f32 {
        self.data.borrow().max_value
    }

    /// Resizes the viewport.
    ///
    /// The current offset is clamped into the new range. The pager must be
    /// told about the resize so it can recenter.
    pub fn set_viewport_width(&self, width: f32) {
        let mut data = self.data.borrow_mut();
        data.viewport_width = width.max(0.0);
        data.max_value = content_range(width);
        data.offset = data.offset.clamp(0.0, data.max_value);
    }

    /// Applies a drag of `delta` pixels, as a user gesture would.
    ///
    /// Ignored while scrolling is disabled. Returns the delta actually
    /// consumed after clamping.
    pub fn scroll_by(&self, delta: f32) -> f32 {
        let target = {
            let data = self.data.borrow();
            if !data.scroll_enabled {
                return 0.0;
            }
            data.offset + delta
        };
        let before = self.value();
        self.notify_offset(target);
        self.value() - before
    }

    /// Drains the queued scroll notifications, returning how many there were.
    pub fn take_pending_notifications(&self) -> usize {
        std::mem::take(&mut self.data.borrow_mut().pending_notifications)
    }

    /// Total scroll notifications produced so far.
    pub fn notification_count(&self) -> usize {
        self.data.borrow().notification_count
    }

    /// Total silent offset writes so far.
    pub fn silent_write_count(&self) -> usize {
        self.data.borrow().silent_write_count
    }

    fn notify_offset(&self, target: f32) {
        let mut data = self.data.borrow_mut();
        let clamped = target.clamp(0.0, data.max_value);
        if clamped == data.offset {
            return;
        }
        data.offset = clamped;
        data.pending_notifications += 1;
        data.notification_count += 1;
    }
}

impl ScrollSurface for PagerScrollState {
    fn offset(&self) -> f32 {
        self.value()
    }

    fn viewport_width(&self) -> f32 {
        self.data.borrow().viewport_width
    }

    fn scroll_to(&mut self, offset: f32) {
        self.notify_offset(offset);
    }

    fn set_offset_silently(&mut self, offset: f32) {
        let mut data = self.data.borrow_mut();
        data.offset = offset.clamp(0.0, data.max_value);
        data.silent_write_count += 1;
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.data.borrow_mut().scroll_enabled = enabled;
    }

    fn is_scroll_enabled(&self) -> bool {
        self.data.borrow().scroll_enabled
    }
}

fn content_range(viewport_width: f32) -> f32 {
    (viewport_width.max(0.0) * (SLOT_COUNT - 1) as f32).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_by_clamps_and_notifies() {
        let state = PagerScrollState::new(100.0);
        assert_eq!(state.max_value(), 200.0);

        assert_eq!(state.scroll_by(150.0), 150.0);
        assert_eq!(state.scroll_by(500.0), 50.0);
        assert_eq!(state.value(), 200.0);
        assert_eq!(state.take_pending_notifications(), 2);
        assert_eq!(state.take_pending_notifications(), 0);

        // Already at the end: nothing consumed, nothing reported
        assert_eq!(state.scroll_by(10.0), 0.0);
        assert_eq!(state.notification_count(), 2);
    }

    #[test]
    fn test_silent_write_does_not_notify() {
        let mut state = PagerScrollState::new(100.0);
        state.set_offset_silently(100.0);

        assert_eq!(state.value(), 100.0);
        assert_eq!(state.take_pending_notifications(), 0);
        assert_eq!(state.silent_write_count(), 1);
    }

    #[test]
    fn test_disabled_state_ignores_gestures_only() {
        let mut state = PagerScrollState::new(100.0);
        state.set_scroll_enabled(false);

        assert_eq!(state.scroll_by(50.0), 0.0);
        assert_eq!(state.value(), 0.0);

        state.scroll_to(80.0);
        assert_eq!(state.value(), 80.0);
        assert_eq!(state.take_pending_notifications(), 1);
    }

    #[test]
    fn test_resize_clamps_offset() {
        let mut state = PagerScrollState::new(100.0);
        state.set_offset_silently(200.0);
        state.set_viewport_width(50.0);

        assert_eq!(state.max_value(), 100.0);
        assert_eq!(state.value(), 100.0);
        assert_eq!(state.viewport_width(), 50.0);
    }
}
