use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, error};

use super::error::FetchError;
use super::hn::HnClient;
use crate::session::{FetchCompletion, FetchRequest, Fetcher};

/// Runs each request on its own worker thread and sends the completion back
/// over a channel.
///
/// Nothing is cancelled: a request that has gone stale still runs to the end,
/// and the session discards its completion on delivery.
pub struct ThreadedFetcher {
    client: HnClient,
    completions: Sender<FetchCompletion>,
}

impl ThreadedFetcher {
    /// Create a fetcher and the receiving end its completions arrive on
    pub fn new(client: HnClient) -> (Self, Receiver<FetchCompletion>) {
        let (completions, receiver) = mpsc::channel();
        (Self { client, completions }, receiver)
    }
}

impl Fetcher for ThreadedFetcher {
    fn fetch(&mut self, request: FetchRequest) {
        let client = self.client.clone();
        let completions = self.completions.clone();
        let worker_request = request.clone();

        let spawned = thread::Builder::new().name("hn-fetch".to_string()).spawn(move || {
            let outcome = client.search(&worker_request.locator);
            if completions.send(FetchCompletion { request: worker_request, outcome }).is_err() {
                debug!("completion receiver dropped before fetch finished");
            }
        });

        if let Err(e) = spawned {
            error!(error = %e, "failed to spawn fetch worker");
            let _ = self
                .completions
                .send(FetchCompletion::failure(request, FetchError::Worker(e.to_string())));
        }
    }
}
