//! Circular pager.
//!
//! # Architecture
//!
//! - [`CircularPager`] - State machine owning the current page index and the slot window
//! - [`PageContentProvider`] - Supplies page count and page content
//! - [`PagerObserver`] - Receives page, scroll, prefetch and tap notifications
//! - [`ScrollSurface`] - The host scroll widget, with distinct notifying and silent offset writes
//! - [`SlotWindow`] - The three recycled slots (previous, current, next)
//! - [`PrefetchScheduler`] - Computes the indices worth warming around the current page
//!
//! # Example
//!
//! ```rust,ignore
//! let scroll_state = PagerScrollState::new(390.0);
//! let mut pager = CircularPager::new(PagerSpec::default());
//! pager.attach_surface(scroll_state.clone());
//! pager.set_provider(Rc::new(my_provider));
//!
//! // Host event loop, on every scroll callback:
//! pager.on_scroll_changed();
//! ```

mod content_provider;
mod observer;
mod pager_state;
mod prefetch;
mod scroll;
mod scroll_detection;
mod slot_window;
mod spec;

pub use content_provider::*;
pub use observer::*;
pub use pager_state::*;
pub use prefetch::*;
pub use scroll::*;
pub use scroll_detection::*;
pub use slot_window::*;
pub use spec::*;
