use tracing::{debug, info, warn};

use super::fetch::{FetchCompletion, FetchRequest, Fetcher};
use crate::query::{RequestLocator, recent_searches};
use crate::storage::{SEARCH_TERM_KEY, TermStore, stored_term};
use crate::stories::{StoriesAction, StoriesState};

/// Search session: the live search term, the request history and the result set.
///
/// Every operation that appends to the history starts exactly one fetch for the
/// new last entry. Completions come back through [`SearchSession::deliver`],
/// which only applies the one belonging to the current last entry.
pub struct SearchSession<F: Fetcher, S: TermStore> {
    fetcher: F,
    store: S,
    term: String,
    // Never empty: seeded with the initial search
    history: Vec<RequestLocator>,
    stories: StoriesState,
    // Page count of the search the items belong to; None until its page 0 arrives
    total_pages: Option<u32>,
}

impl<F: Fetcher, S: TermStore> SearchSession<F, S> {
    /// Create a session from the stored term, or `default_term` when nothing
    /// (or an empty string) is stored. No fetch is started until [`start`](Self::start).
    pub fn new(fetcher: F, store: S, default_term: &str) -> Self {
        let term = stored_term(&store, default_term);
        let history = vec![RequestLocator::build(term.clone(), 0)];

        Self { fetcher, store, term, history, stories: StoriesState::new(), total_pages: None }
    }

    /// Fetch the initial search
    pub fn start(&mut self) {
        self.trigger_fetch();
    }

    /// Live search term (what the input shows)
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn history(&self) -> &[RequestLocator] {
        &self.history
    }

    pub fn current_locator(&self) -> &RequestLocator {
        &self.history[self.history.len() - 1]
    }

    pub fn recent_searches(&self) -> Vec<String> {
        recent_searches(&self.history)
    }

    pub fn state(&self) -> &StoriesState {
        &self.stories
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the live term can be submitted (an empty term cannot)
    pub fn can_submit(&self) -> bool {
        !self.term.is_empty()
    }

    /// Whether the API reported pages beyond the current one.
    ///
    /// False from the moment a new search is issued until its first page has
    /// arrived, so the next page is never requested against an older search's
    /// page count.
    pub fn has_more(&self) -> bool {
        match self.total_pages {
            Some(total) => self.stories.current_page.saturating_add(1) < total,
            None => false,
        }
    }

    /// Update the live term; no request is made
    pub fn set_term(&mut self, text: impl Into<String>) {
        self.term = text.into();
        self.persist_term();
    }

    /// Submit the live term as a new search. Returns false when it is empty.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        let term = self.term.clone();
        self.submit_new(&term);
        true
    }

    /// Start a new search for `term` from page 0
    pub fn submit_new(&mut self, term: &str) {
        self.push_locator(RequestLocator::build(term, 0));
    }

    /// Re-issue a previous search and make it the live term
    pub fn repeat_past(&mut self, term: &str) {
        self.set_term(term);
        self.submit_new(term);
    }

    /// Request the next page of the current search
    pub fn load_more(&mut self) {
        let term = self.current_locator().extract_term().to_string();
        let next_page = self.stories.current_page.saturating_add(1);
        self.push_locator(RequestLocator::build(term, next_page));
    }

    /// Dismiss one story from the result list
    pub fn remove_result(&mut self, id: &str) {
        self.stories.apply(StoriesAction::Remove { id: id.to_string() });
    }

    /// Apply a finished fetch if it belongs to the current last history entry.
    ///
    /// Returns false (and changes nothing) for a stale completion.
    pub fn deliver(&mut self, completion: FetchCompletion) -> bool {
        if !self.is_current(&completion.request) {
            debug!(
                locator = %completion.request.locator,
                index = completion.request.index,
                current = %self.current_locator(),
                "discarding stale fetch result"
            );
            return false;
        }

        match completion.outcome {
            Ok(page) => {
                info!(
                    locator = %completion.request.locator,
                    hits = page.hits.len(),
                    page = page.page,
                    "fetch succeeded"
                );
                self.total_pages = Some(page.nb_pages);
                self.stories.apply(StoriesAction::FetchSuccess { page: page.page, list: page.hits });
            }
            Err(error) => {
                warn!(locator = %completion.request.locator, %error, "fetch failed");
                self.stories.apply(StoriesAction::FetchFailure);
            }
        }
        true
    }

    fn is_current(&self, request: &FetchRequest) -> bool {
        request.index + 1 == self.history.len() && request.locator == *self.current_locator()
    }

    fn push_locator(&mut self, locator: RequestLocator) {
        if locator.page() == 0 {
            self.total_pages = None;
        }
        self.history.push(locator);
        self.trigger_fetch();
    }

    fn trigger_fetch(&mut self) {
        let index = self.history.len() - 1;
        let request = FetchRequest { index, locator: self.history[index].clone() };

        self.stories.apply(StoriesAction::FetchStart);
        info!(locator = %request.locator, index, "starting fetch");
        self.fetcher.fetch(request);
    }

    fn persist_term(&mut self) {
        if let Err(e) = self.store.set(SEARCH_TERM_KEY, &self.term) {
            warn!(error = %e, "failed to persist search term");
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, bail};

    use super::*;
    use crate::client::FetchError;
    use crate::models::{SearchPage, Story};
    use crate::storage::MemoryTermStore;

    #[derive(Default)]
    struct RecordingFetcher {
        requests: Vec<FetchRequest>,
    }

    impl Fetcher for RecordingFetcher {
        fn fetch(&mut self, request: FetchRequest) {
            self.requests.push(request);
        }
    }

    struct FailingStore;

    impl TermStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            bail!("disk full")
        }
    }

    fn story(id: &str) -> Story {
        Story {
            id: id.to_string(),
            title: format!("Story {}", id),
            author: "dang".to_string(),
            url: String::new(),
            comment_count: 1,
            point_count: 1,
            created_at: None,
        }
    }

    fn page(page: u32, ids: &[&str]) -> SearchPage {
        SearchPage { hits: ids.iter().map(|id| story(id)).collect(), page, nb_pages: 10 }
    }

    fn session() -> SearchSession<RecordingFetcher, MemoryTermStore> {
        SearchSession::new(RecordingFetcher::default(), MemoryTermStore::new(), "React")
    }

    fn last_request(session: &SearchSession<RecordingFetcher, MemoryTermStore>) -> FetchRequest {
        session.fetcher().requests.last().cloned().unwrap()
    }

    fn item_ids(session: &SearchSession<RecordingFetcher, MemoryTermStore>) -> Vec<String> {
        session.state().items.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_new_uses_default_term() {
        let session = session();
        assert_eq!(session.term(), "React");
        assert_eq!(session.history(), &[RequestLocator::build("React", 0)]);
        assert!(session.fetcher().requests.is_empty());
    }

    #[test]
    fn test_new_uses_stored_term() {
        let session =
            SearchSession::new(RecordingFetcher::default(), MemoryTermStore::with_term("zig"), "React");
        assert_eq!(session.term(), "zig");
        assert_eq!(session.current_locator(), &RequestLocator::build("zig", 0));
    }

    #[test]
    fn test_new_ignores_empty_stored_term() {
        let session =
            SearchSession::new(RecordingFetcher::default(), MemoryTermStore::with_term(""), "React");
        assert_eq!(session.term(), "React");
    }

    #[test]
    fn test_start_fetches_initial_locator() {
        let mut session = session();
        session.start();

        assert_eq!(
            session.fetcher().requests,
            vec![FetchRequest { index: 0, locator: RequestLocator::build("React", 0) }]
        );
        assert!(session.state().is_loading);
    }

    #[test]
    fn test_set_term_persists_without_fetching() {
        let mut session = session();
        session.set_term("ru");

        assert_eq!(session.term(), "ru");
        assert_eq!(session.store().get(SEARCH_TERM_KEY), Some("ru".to_string()));
        assert_eq!(session.history().len(), 1);
        assert!(session.fetcher().requests.is_empty());
    }

    #[test]
    fn test_submit_new_appends_and_fetches() {
        let mut session = session();
        session.submit_new("rust");

        assert_eq!(
            session.history(),
            &[RequestLocator::build("React", 0), RequestLocator::build("rust", 0)]
        );
        assert_eq!(last_request(&session).locator, RequestLocator::build("rust", 0));
        assert_eq!(session.fetcher().requests.len(), 1);
    }

    #[test]
    fn test_submit_uses_live_term() {
        let mut session = session();
        session.set_term("go");
        assert!(session.submit());
        assert_eq!(session.current_locator(), &RequestLocator::build("go", 0));
    }

    #[test]
    fn test_submit_rejects_empty_term() {
        let mut session = session();
        session.set_term("");
        assert!(!session.can_submit());
        assert!(!session.submit());
        assert_eq!(session.history().len(), 1);
        assert!(session.fetcher().requests.is_empty());
    }

    #[test]
    fn test_stale_delivery_discarded() {
        let mut session = session();
        session.start();
        let stale = last_request(&session);

        session.submit_new("rust");
        let current = last_request(&session);

        assert!(!session.deliver(FetchCompletion::success(stale, page(0, &["react-1"]))));
        assert!(session.state().items.is_empty());
        assert!(session.state().is_loading);

        assert!(session.deliver(FetchCompletion::success(current, page(0, &["rust-1"]))));
        assert_eq!(item_ids(&session), vec!["rust-1"]);
        assert!(!session.state().is_loading);
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut session = session();
        session.start();
        let stale = last_request(&session);
        session.submit_new("rust");

        let error = FetchError::Status { url: "u".to_string(), status: 503 };
        assert!(!session.deliver(FetchCompletion::failure(stale, error)));
        assert!(!session.state().is_error);
    }

    #[test]
    fn test_same_locator_at_older_index_is_stale() {
        let mut session = session();
        session.submit_new("rust");
        let first = last_request(&session);
        session.submit_new("rust");

        assert_eq!(first.locator, *session.current_locator());
        assert!(!session.deliver(FetchCompletion::success(first, page(0, &["a"]))));
    }

    #[test]
    fn test_load_more_appends_next_page() {
        let mut session = session();
        session.submit_new("go");
        let request = last_request(&session);
        session.deliver(FetchCompletion::success(request, page(0, &["g1", "g2"])));

        session.load_more();
        let request = last_request(&session);
        assert_eq!(request.locator, RequestLocator::build("go", 1));

        session.deliver(FetchCompletion::success(request, page(1, &["g3"])));
        assert_eq!(item_ids(&session), vec!["g1", "g2", "g3"]);
        assert_eq!(session.state().current_page, 1);
    }

    #[test]
    fn test_load_more_after_failure_retries_same_page() {
        let mut session = session();
        session.submit_new("go");
        let request = last_request(&session);
        session.deliver(FetchCompletion::success(request, page(0, &["g1"])));

        session.load_more();
        let request = last_request(&session);
        session.deliver(FetchCompletion::failure(request, FetchError::Decode("bad".to_string())));
        assert!(session.state().is_error);
        assert_eq!(item_ids(&session), vec!["g1"]);

        session.load_more();
        assert_eq!(last_request(&session).locator, RequestLocator::build("go", 1));
        assert!(!session.state().is_error);
    }

    #[test]
    fn test_load_more_keeps_searched_term_not_live_term() {
        let mut session = session();
        session.submit_new("go");
        session.set_term("typing something else");

        session.load_more();
        assert_eq!(session.current_locator().extract_term(), "go");
    }

    #[test]
    fn test_repeat_past_sets_term_and_fetches() {
        let mut session = session();
        session.submit_new("rust");
        session.submit_new("zig");

        let recent = session.recent_searches();
        assert_eq!(recent, vec!["React", "rust"]);

        session.repeat_past(&recent[1]);
        assert_eq!(session.term(), "rust");
        assert_eq!(session.store().get(SEARCH_TERM_KEY), Some("rust".to_string()));
        assert_eq!(session.current_locator(), &RequestLocator::build("rust", 0));
        assert_eq!(session.recent_searches(), vec!["React", "rust", "zig"]);
    }

    #[test]
    fn test_remove_result() {
        let mut session = session();
        session.start();
        let request = last_request(&session);
        session.deliver(FetchCompletion::success(request, page(0, &["x", "y"])));

        session.remove_result("y");
        assert_eq!(item_ids(&session), vec!["x"]);

        session.remove_result("missing");
        assert_eq!(item_ids(&session), vec!["x"]);
    }

    #[test]
    fn test_has_more() {
        let mut session = session();
        assert!(!session.has_more());

        session.start();
        let request = last_request(&session);
        let last = SearchPage { hits: vec![story("a")], page: 0, nb_pages: 1 };
        session.deliver(FetchCompletion::success(request, last));
        assert!(!session.has_more());
    }

    #[test]
    fn test_has_more_reset_by_new_search() {
        let mut session = session();
        session.start();
        session.deliver(FetchCompletion::success(last_request(&session), page(0, &["a"])));
        assert!(session.has_more());

        session.submit_new("rust");
        assert!(!session.has_more());

        session.deliver(FetchCompletion::success(last_request(&session), page(0, &["r"])));
        assert!(session.has_more());
    }

    #[test]
    fn test_has_more_kept_after_failed_load_more() {
        let mut session = session();
        session.start();
        session.deliver(FetchCompletion::success(last_request(&session), page(0, &["a"])));

        session.load_more();
        let failure = FetchError::Decode("truncated".to_string());
        session.deliver(FetchCompletion::failure(last_request(&session), failure));

        assert!(session.state().is_error);
        assert!(session.has_more());
        session.load_more();
        assert_eq!(last_request(&session).locator, RequestLocator::build("React", 1));
    }

    #[test]
    fn test_persistence_failure_is_not_fatal() {
        let mut session = SearchSession::new(RecordingFetcher::default(), FailingStore, "React");
        session.set_term("rust");
        session.repeat_past("go");

        assert_eq!(session.term(), "go");
        assert_eq!(session.fetcher().requests.len(), 1);
    }
}
