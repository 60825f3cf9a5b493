//! Content provider trait for the circular pager.
//!
//! This module defines the [`PageContentProvider`] trait which supplies the
//! page count and per-page content that the pager installs into its slots.

use super::slot_window::CENTER_SLOT;

/// Which of the three slots a piece of content is destined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Previous,
    Current,
    Next,
}

impl SlotRole {
    /// Roles in slot order, left to right.
    pub const ALL: [SlotRole; 3] = [SlotRole::Previous, SlotRole::Current, SlotRole::Next];

    /// Returns the role of the slot at `position` (0, 1 or 2).
    pub fn from_position(position: usize) -> Option<SlotRole> {
        Self::ALL.get(position).copied()
    }

    /// Zero-based slot position of this role.
    pub fn position(self) -> usize {
        match self {
            SlotRole::Previous => 0,
            SlotRole::Current => 1,
            SlotRole::Next => 2,
        }
    }

    /// Page offset of this role relative to the current page.
    pub fn page_offset(self) -> isize {
        self.position() as isize - CENTER_SLOT as isize
    }
}

/// Supplies pages to a [`CircularPager`](super::CircularPager).
///
/// The page count is queried before every slot population and reload, and
/// may change between calls. Content lookups must be idempotent: the pager
/// may request the same page several times and makes no caching
/// assumptions.
pub trait PageContentProvider {
    /// Content installed into a slot. Owned by the slot while it is shown.
    type Content;

    /// The total number of pages in the ring.
    fn page_count(&self) -> usize;

    /// Returns content for the page at `index`, which will be shown in the
    /// slot with the given `role`.
    fn content_for_page(&self, index: usize, role: SlotRole) -> Self::Content;

    /// Receives content back when its slot is cleared.
    ///
    /// Implementations that pool views can recycle `content` here. The
    /// default drops it.
    fn release_content(&self, index: usize, content: Self::Content) {
        let _ = (index, content);
    }
}
