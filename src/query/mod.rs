//! Request locators and the recent-searches view derived from them.

pub mod locator;
pub mod recent;

pub use locator::{DEFAULT_API_BASE, RequestLocator};
pub use recent::{MAX_RECENT_SEARCHES, recent_searches};
