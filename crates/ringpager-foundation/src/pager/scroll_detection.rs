//! Page-crossing detection and coordinate translation.
//!
//! The content of the scroll surface is three pages wide. Resting on the
//! middle page puts the offset at one viewport width. Scrolling a full page
//! forward reaches the next threshold, a full page back reaches zero.
//! Detection is level-triggered: once the pager recenters, neither
//! threshold can be met again until another full page of motion.

use super::slot_window::CENTER_SLOT;

/// Offsets within this many pixels of the center count as centered.
pub const CENTER_TOLERANCE: f32 = 0.01;

/// Direction of a page transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Backward,
    Forward,
}

impl PageDirection {
    /// Signed page delta: -1 or +1.
    pub fn delta(self) -> isize {
        match self {
            PageDirection::Backward => -1,
            PageDirection::Forward => 1,
        }
    }
}

/// Neutral offset showing the center slot.
pub fn center_offset(viewport_width: f32) -> f32 {
    CENTER_SLOT as f32 * viewport_width
}

/// Offset at or beyond which the next page becomes current.
pub fn next_threshold(viewport_width: f32) -> f32 {
    (CENTER_SLOT + 1) as f32 * viewport_width
}

/// Offset at or below which the previous page becomes current.
pub fn prev_threshold(viewport_width: f32) -> f32 {
    (CENTER_SLOT as f32 - 1.0) * viewport_width
}

/// Decides whether `offset` has crossed a page threshold.
///
/// Returns `None` while the offset is strictly between the thresholds, and
/// always for a surface that has not been laid out (non-positive width).
pub fn detect_page_delta(offset: f32, viewport_width: f32) -> Option<PageDirection> {
    if viewport_width <= 0.0 || !viewport_width.is_finite() || !offset.is_finite() {
        return None;
    }
    if offset >= next_threshold(viewport_width) {
        Some(PageDirection::Forward)
    } else if offset <= prev_threshold(viewport_width) {
        Some(PageDirection::Backward)
    } else {
        None
    }
}

pub fn is_centered(offset: f32, viewport_width: f32) -> bool {
    (offset - center_offset(viewport_width)).abs() <= CENTER_TOLERANCE
}

/// Translates a physical offset into the unbounded virtual coordinate.
///
/// The result is where the offset would sit in an ordinary scroll view
/// holding all `page_count` pages side by side, wrapped into
/// `0..viewport_width * page_count`.
pub fn virtual_offset(offset: f32, viewport_width: f32, current: usize, page_count: usize) -> f32 {
    let span = viewport_width * page_count as f32;
    let position = (offset - center_offset(viewport_width)) + viewport_width * current as f32;
    if span <= 0.0 {
        position
    } else if position < 0.0 {
        position + span
    } else if position >= span {
        position - span
    } else {
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(center_offset(100.0), 100.0);
        assert_eq!(next_threshold(100.0), 200.0);
        assert_eq!(prev_threshold(100.0), 0.0);
    }

    #[test]
    fn test_band_between_thresholds_is_quiet() {
        for offset in [1.0, 50.0, 100.0, 150.0, 199.0] {
            assert_eq!(detect_page_delta(offset, 100.0), None, "offset {offset}");
        }
    }

    #[test]
    fn test_crossings() {
        assert_eq!(detect_page_delta(200.0, 100.0), Some(PageDirection::Forward));
        assert_eq!(detect_page_delta(250.0, 100.0), Some(PageDirection::Forward));
        assert_eq!(detect_page_delta(0.0, 100.0), Some(PageDirection::Backward));
        assert_eq!(detect_page_delta(-5.0, 100.0), Some(PageDirection::Backward));
    }

    #[test]
    fn test_unlaid_out_surface_never_transitions() {
        assert_eq!(detect_page_delta(0.0, 0.0), None);
        assert_eq!(detect_page_delta(10.0, -1.0), None);
        assert_eq!(detect_page_delta(f32::NAN, 100.0), None);
    }

    #[test]
    fn test_is_centered() {
        assert!(is_centered(100.0, 100.0));
        assert!(!is_centered(101.0, 100.0));
    }

    #[test]
    fn test_virtual_offset_resting() {
        assert_eq!(virtual_offset(100.0, 100.0, 0, 3), 0.0);
        assert_eq!(virtual_offset(100.0, 100.0, 2, 3), 200.0);
    }

    #[test]
    fn test_virtual_offset_mid_gesture() {
        assert_eq!(virtual_offset(150.0, 100.0, 1, 3), 150.0);
        // Dragging back from page 0 wraps to the end of the ring
        assert_eq!(virtual_offset(50.0, 100.0, 0, 3), 250.0);
        assert_eq!(virtual_offset(180.0, 100.0, 2, 3), 280.0);
        // A full page forward from the last page wraps to the start
        assert_eq!(virtual_offset(200.0, 100.0, 2, 3), 0.0);
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(PageDirection::Forward.delta(), 1);
        assert_eq!(PageDirection::Backward.delta(), -1);
    }
}
