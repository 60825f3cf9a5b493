//! Slot window for the circular pager.
//!
//! The pager renders through exactly [`SLOT_COUNT`] slots that are created
//! once and reused for the pager's lifetime. A page change never creates or
//! destroys a slot; it clears each slot and installs content for the slot's
//! new logical page.

use smallvec::SmallVec;

use ringpager_core::circular_index;

use super::content_provider::{PageContentProvider, SlotRole};

/// Number of physical render slots: previous, current, next.
pub const SLOT_COUNT: usize = 3;

/// Zero-based position of the slot holding the current page.
pub const CENTER_SLOT: usize = SLOT_COUNT / 2;

/// An owned content holder for one slot.
///
/// Content belongs to the slot only while installed; [`PageSlot::clear`]
/// hands it back to the caller, which returns it to the provider.
#[derive(Debug)]
pub struct PageSlot<C> {
    role: SlotRole,
    page_index: Option<usize>,
    content: Option<C>,
}

impl<C> PageSlot<C> {
    fn new(role: SlotRole) -> Self {
        Self {
            role,
            page_index: None,
            content: None,
        }
    }

    pub fn role(&self) -> SlotRole {
        self.role
    }

    /// Logical page currently shown in this slot.
    pub fn page_index(&self) -> Option<usize> {
        self.page_index
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Removes the installed content, returning it with its page index.
    pub fn clear(&mut self) -> Option<(usize, C)> {
        let index = self.page_index.take()?;
        self.content.take().map(|content| (index, content))
    }

    /// Installs `content` for page `index`. The slot must be empty.
    pub fn install(&mut self, index: usize, content: C) {
        debug_assert!(self.is_empty(), "install into an occupied {:?} slot", self.role);
        self.page_index = Some(index);
        self.content = Some(content);
    }
}

/// The fixed ring of [`SLOT_COUNT`] slots.
#[derive(Debug)]
pub struct SlotWindow<C> {
    slots: SmallVec<[PageSlot<C>; SLOT_COUNT]>,
}

impl<C> SlotWindow<C> {
    /// Allocates the slots, all empty.
    pub fn new() -> Self {
        Self {
            slots: SlotRole::ALL.iter().map(|role| PageSlot::new(*role)).collect(),
        }
    }

    /// Computes the logical page for each slot when `center` is current.
    ///
    /// Returns `None` if `center` is not a valid index for `page_count`.
    pub fn indices_for(center: usize, page_count: usize) -> Option<[usize; SLOT_COUNT]> {
        let mut indices = [0; SLOT_COUNT];
        for (role, index) in SlotRole::ALL.iter().zip(indices.iter_mut()) {
            *index = circular_index(center, role.page_offset(), page_count)?;
        }
        Some(indices)
    }

    /// Replaces every slot's content with content for the pages around
    /// `center`.
    ///
    /// Old content is handed back through
    /// [`PageContentProvider::release_content`] before the new content is
    /// fetched. Returns the indices installed, or `None` (leaving the slots
    /// untouched) if `center` is out of range for `page_count`.
    pub fn populate<P>(
        &mut self,
        center: usize,
        page_count: usize,
        provider: &P,
    ) -> Option<[usize; SLOT_COUNT]>
    where
        P: PageContentProvider<Content = C> + ?Sized,
    {
        let indices = Self::indices_for(center, page_count)?;
        for (slot, &index) in self.slots.iter_mut().zip(indices.iter()) {
            if let Some((old_index, content)) = slot.clear() {
                provider.release_content(old_index, content);
            }
            let content = provider.content_for_page(index, slot.role);
            slot.install(index, content);
        }
        Some(indices)
    }

    /// Empties every slot, handing content back to `provider`.
    pub fn clear_all<P>(&mut self, provider: &P)
    where
        P: PageContentProvider<Content = C> + ?Sized,
    {
        for slot in self.slots.iter_mut() {
            if let Some((index, content)) = slot.clear() {
                provider.release_content(index, content);
            }
        }
    }

    pub fn slot(&self, role: SlotRole) -> &PageSlot<C> {
        &self.slots[role.position()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageSlot<C>> {
        self.slots.iter()
    }

    /// Page index shown in each slot, left to right.
    pub fn page_indices(&self) -> [Option<usize>; SLOT_COUNT] {
        let mut indices = [None; SLOT_COUNT];
        for (index, slot) in indices.iter_mut().zip(self.slots.iter()) {
            *index = slot.page_index;
        }
        indices
    }
}

impl<C> Default for SlotWindow<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Labels {
        count: usize,
        released: RefCell<Vec<usize>>,
    }

    impl PageContentProvider for Labels {
        type Content = String;

        fn page_count(&self) -> usize {
            self.count
        }

        fn content_for_page(&self, index: usize, role: SlotRole) -> String {
            format!("{index}:{role:?}")
        }

        fn release_content(&self, index: usize, _content: String) {
            self.released.borrow_mut().push(index);
        }
    }

    fn labels(count: usize) -> Labels {
        Labels {
            count,
            released: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_center_slot_is_middle() {
        assert_eq!(CENTER_SLOT, 1);
        assert_eq!(SlotRole::from_position(CENTER_SLOT), Some(SlotRole::Current));
    }

    #[test]
    fn test_indices_wrap_around_both_ends() {
        assert_eq!(SlotWindow::<()>::indices_for(0, 5), Some([4, 0, 1]));
        assert_eq!(SlotWindow::<()>::indices_for(4, 5), Some([3, 4, 0]));
        assert_eq!(SlotWindow::<()>::indices_for(0, 1), Some([0, 0, 0]));
        assert_eq!(SlotWindow::<()>::indices_for(5, 5), None);
    }

    #[test]
    fn test_populate_installs_role_content() {
        let provider = labels(3);
        let mut window = SlotWindow::new();

        assert_eq!(window.populate(1, 3, &provider), Some([0, 1, 2]));
        assert_eq!(window.slot(SlotRole::Previous).content().unwrap(), "0:Previous");
        assert_eq!(window.slot(SlotRole::Current).content().unwrap(), "1:Current");
        assert_eq!(window.slot(SlotRole::Next).content().unwrap(), "2:Next");
        assert!(provider.released.borrow().is_empty());
    }

    #[test]
    fn test_repopulate_releases_previous_content() {
        let provider = labels(3);
        let mut window = SlotWindow::new();
        window.populate(0, 3, &provider);
        window.populate(1, 3, &provider);

        assert_eq!(*provider.released.borrow(), vec![2, 0, 1]);
        assert_eq!(window.page_indices(), [Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_invalid_center_leaves_slots_untouched() {
        let provider = labels(3);
        let mut window = SlotWindow::new();
        window.populate(2, 3, &provider);

        assert_eq!(window.populate(7, 3, &provider), None);
        assert_eq!(window.page_indices(), [Some(1), Some(2), Some(0)]);
    }

    #[test]
    fn test_clear_all_empties_every_slot() {
        let provider = labels(4);
        let mut window = SlotWindow::new();
        window.populate(0, 4, &provider);
        window.clear_all(&provider);

        assert!(window.iter().all(PageSlot::is_empty));
        assert_eq!(provider.released.borrow().len(), SLOT_COUNT);
    }
}
