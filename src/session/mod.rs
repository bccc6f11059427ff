//! Search session controller.
//!
//! [`SearchSession`] owns the live search term (persisted through a
//! [`TermStore`](crate::storage::TermStore)), the append-only request history
//! and the result set. Fetching goes through the [`Fetcher`] seam:
//!
//! 1. An operation appends a locator to the history and calls the fetcher once
//!    with a [`FetchRequest`] tagged with the entry's history index.
//! 2. The fetcher answers later, off the control thread, with a [`FetchCompletion`].
//! 3. The owner of the session hands the completion to [`SearchSession::deliver`],
//!    which drops it unless it still belongs to the last history entry.

pub mod controller;
pub mod fetch;

pub use controller::SearchSession;
pub use fetch::{FetchCompletion, FetchRequest, Fetcher};
