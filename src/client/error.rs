use thiserror::Error;

/// Why a search request produced no page.
///
/// The session treats every variant the same way (the result set is marked as
/// failed); the variants exist for logs and the one-shot CLI output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },
    #[error("search API returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("failed to decode search response: {0}")]
    Decode(String),
    #[error("failed to start fetch worker: {0}")]
    Worker(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
