//! Windowed circular paginator for ringpager.
//!
//! A [`CircularPager`] presents an endless, wrapping sequence of pages using
//! three recycled render slots. The host scroll widget only ever spans three
//! pages; after every page transition the pager silently moves the scroll
//! offset back to the middle slot so the user can keep swiping forever.

pub mod pager;

pub use pager::*;
pub use ringpager_core::{circular_index, index_delta, PageIndexSet, Point};
