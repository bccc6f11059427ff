use std::sync::mpsc::Sender;

use tracing::warn;

use crate::client::FetchError;
use crate::models::SearchPage;
use crate::query::RequestLocator;

/// A fetch the session asked for: which history entry it belongs to and what to request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Position of the originating entry in the search history
    pub index: usize,
    pub locator: RequestLocator,
}

/// Outcome of a [`FetchRequest`], handed back to the session for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCompletion {
    pub request: FetchRequest,
    pub outcome: Result<SearchPage, FetchError>,
}

impl FetchCompletion {
    pub fn success(request: FetchRequest, page: SearchPage) -> Self {
        Self { request, outcome: Ok(page) }
    }

    pub fn failure(request: FetchRequest, error: FetchError) -> Self {
        Self { request, outcome: Err(error) }
    }
}

/// Starts fetches on behalf of a session.
///
/// `fetch` must not block on the network. The completion is expected to come
/// back later through [`SearchSession::deliver`](super::SearchSession::deliver).
pub trait Fetcher {
    fn fetch(&mut self, request: FetchRequest);
}

/// Forward requests over a channel; whoever owns the receiver performs them
impl Fetcher for Sender<FetchRequest> {
    fn fetch(&mut self, request: FetchRequest) {
        // A dropped receiver means nobody will answer; the session stays loading
        if let Err(e) = self.send(request) {
            warn!(locator = %e.0.locator, index = e.0.index, "fetch receiver dropped, request lost");
        }
    }
}
