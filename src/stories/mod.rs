//! Result set state and the sorted views rendered from it.
//!
//! [`StoriesState`] is changed only through [`StoriesAction`], a closed set of
//! transitions (fetch started, page arrived, fetch failed, story dismissed).
//! [`SortState`] never changes the state; it produces an ordered view for display.

pub mod reducer;
pub mod sort;

pub use reducer::{StoriesAction, StoriesState};
pub use sort::{SortKey, SortState};
