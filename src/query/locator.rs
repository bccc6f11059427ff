use std::fmt;

use anyhow::{Context, Result, anyhow};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Public HN search endpoint
pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";

const API_SEARCH: &str = "/search";
const PARAM_SEARCH: &str = "query";
const PARAM_PAGE: &str = "page";

// Characters escaped inside the query parameter value. Includes the query
// delimiters and `%` itself so any term survives a render/parse cycle.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Reference to a single (search term, page) request.
///
/// The term and page are held as separate fields, so extracting the term never
/// depends on how the term is spelled. Two locators are equal exactly when their
/// term and page are equal.
///
/// # Examples
///
/// ```
/// use hacker_stories::RequestLocator;
///
/// let locator = RequestLocator::build("c&c=fun?", 3);
/// assert_eq!(locator.extract_term(), "c&c=fun?");
/// assert_eq!(RequestLocator::from_url(&locator.to_url("https://hn.algolia.com/api/v1"))?, locator);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestLocator {
    term: String,
    page: u32,
}

impl RequestLocator {
    pub fn build(term: impl Into<String>, page: u32) -> Self {
        Self { term: term.into(), page }
    }

    pub fn extract_term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Render the request URL against an API base such as [`DEFAULT_API_BASE`]
    pub fn to_url(&self, api_base: &str) -> String {
        format!(
            "{}{}?{}={}&{}={}",
            api_base.trim_end_matches('/'),
            API_SEARCH,
            PARAM_SEARCH,
            utf8_percent_encode(&self.term, QUERY_ENCODE_SET),
            PARAM_PAGE,
            self.page
        )
    }

    /// Parse a request URL produced by [`RequestLocator::to_url`].
    ///
    /// Only the first `?` separates the query string, and the term is
    /// percent-decoded after splitting, so encoded delimiters in the term are
    /// never mistaken for parameter boundaries. A missing `page` means page 0.
    pub fn from_url(url: &str) -> Result<Self> {
        let (_, query) =
            url.split_once('?').ok_or_else(|| anyhow!("Request URL has no query string: {}", url))?;

        let mut term = None;
        let mut page = None;
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                PARAM_SEARCH => {
                    let decoded = percent_decode_str(value)
                        .decode_utf8()
                        .with_context(|| format!("Search term is not valid UTF-8: {}", value))?;
                    term = Some(decoded.into_owned());
                }
                PARAM_PAGE => {
                    let parsed = value
                        .parse::<u32>()
                        .with_context(|| format!("Invalid page number in request URL: {}", value))?;
                    page = Some(parsed);
                }
                _ => {}
            }
        }

        let term = term
            .ok_or_else(|| anyhow!("Request URL has no `{}` parameter: {}", PARAM_SEARCH, url))?;
        Ok(Self::build(term, page.unwrap_or(0)))
    }
}

impl fmt::Display for RequestLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" page {}", self.term, self.page)
    }
}
