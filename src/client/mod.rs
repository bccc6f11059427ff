//! HN search API access.
//!
//! [`HnClient`] performs one blocking request per locator. [`ThreadedFetcher`]
//! plugs it into a [`SearchSession`](crate::session::SearchSession) so requests
//! run off the UI thread and come back as completions on a channel.

pub mod error;
pub mod hn;
pub mod threaded;

pub use error::FetchError;
pub use hn::{HnClient, parse_search_page};
pub use threaded::ThreadedFetcher;
