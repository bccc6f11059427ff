use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;

use super::error::FetchError;
use crate::models::SearchPage;
use crate::query::RequestLocator;

/// Blocking client for the HN search API
#[derive(Debug, Clone)]
pub struct HnClient {
    api_base: String,
    http: Client,
}

impl HnClient {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hacker-stories/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { api_base: api_base.into(), http })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch the page a locator refers to
    pub fn search(&self, locator: &RequestLocator) -> Result<SearchPage, FetchError> {
        let url = locator.to_url(&self.api_base);
        debug!(%url, "requesting search page");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| FetchError::Http { url: url.clone(), message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status: status.as_u16() });
        }

        let body =
            response.text().map_err(|e| FetchError::Http { url: url.clone(), message: e.to_string() })?;
        let page = parse_search_page(&body)?;
        debug!(%url, hits = page.hits.len(), page = page.page, "search page received");
        Ok(page)
    }
}

/// Decode a search API response body
pub fn parse_search_page(body: &str) -> Result<SearchPage, FetchError> {
    Ok(serde_json::from_str(body)?)
}
