use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One Hacker News hit as returned by the search API.
///
/// Identity is `id` (Algolia's `objectID`); the remaining fields are display data.
/// The API sends `null` for titles, urls and counts on some hits (Ask HN posts,
/// deleted authors), which decode as empty strings and zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default, deserialize_with = "super::deserializers::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::deserializers::null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "super::deserializers::null_as_default")]
    pub url: String,
    #[serde(
        rename = "num_comments",
        default,
        deserialize_with = "super::deserializers::null_as_default"
    )]
    pub comment_count: u32,
    #[serde(rename = "points", default, deserialize_with = "super::deserializers::null_as_default")]
    pub point_count: u32,
    #[serde(default, deserialize_with = "super::deserializers::deserialize_created_at")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Story {
    /// Link to the HN discussion page, used when a story has no external url
    pub fn discussion_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }

    /// External url if present, otherwise the discussion page
    pub fn link(&self) -> String {
        if self.url.is_empty() { self.discussion_url() } else { self.url.clone() }
    }
}
