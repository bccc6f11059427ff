//! Hacker Stories - search and browse Hacker News stories from the terminal
//!
//! The crate is organised around a [`SearchSession`]:
//!
//! - A live search term, persisted between runs through a [`storage::TermStore`]
//! - An append-only history of [`RequestLocator`]s, one per request issued
//! - A result set ([`StoriesState`]) changed only through [`StoriesAction`]s
//!
//! Requests go out through a [`session::Fetcher`]; [`client::ThreadedFetcher`]
//! runs them against the HN search API on worker threads. Completions that no
//! longer belong to the latest request are discarded.
//!
//! # Example
//!
//! ```
//! use hacker_stories::{RequestLocator, recent_searches};
//!
//! let history = vec![
//!     RequestLocator::build("rust", 0),
//!     RequestLocator::build("rust", 1),
//!     RequestLocator::build("go", 0),
//! ];
//! assert_eq!(recent_searches(&history), vec!["rust"]);
//! assert_eq!(
//!     history[2].to_url("https://hn.algolia.com/api/v1"),
//!     "https://hn.algolia.com/api/v1/search?query=go&page=0"
//! );
//! ```

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod models;
pub mod query;
pub mod session;
pub mod storage;
pub mod stories;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use client::{FetchError, HnClient, ThreadedFetcher};
pub use models::{SearchPage, Story};
pub use query::{RequestLocator, recent_searches};
pub use session::{FetchCompletion, FetchRequest, Fetcher, SearchSession};
pub use stories::{SortKey, SortState, StoriesAction, StoriesState};
