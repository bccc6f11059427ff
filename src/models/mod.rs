//! Data models for Hacker News search results.
//!
//! - [`Story`] - A single search hit (the unit the result list is made of)
//! - [`SearchPage`] - One page of hits plus the page index the API answered with
//!
//! These models use serde for JSON deserialization with custom deserializers
//! for fields the API sends as `null` or in more than one shape, kept in the
//! `deserializers` module.

pub mod deserializers;
pub mod search;
pub mod story;

pub use search::SearchPage;
pub use story::Story;
