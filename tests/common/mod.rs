//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::sync::mpsc::{self, Receiver, Sender};

use hacker_stories::storage::MemoryTermStore;
use hacker_stories::{FetchCompletion, FetchRequest, SearchPage, SearchSession, Story};

/// Builder for test stories
pub struct StoryBuilder {
    story: Story,
}

impl StoryBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            story: Story {
                id: id.to_string(),
                title: format!("Story {}", id),
                author: "pg".to_string(),
                url: format!("https://example.com/{}", id),
                comment_count: 0,
                point_count: 0,
                created_at: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.story.title = title.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.story.author = author.to_string();
        self
    }

    pub fn comments(mut self, count: u32) -> Self {
        self.story.comment_count = count;
        self
    }

    pub fn points(mut self, count: u32) -> Self {
        self.story.point_count = count;
        self
    }

    pub fn build(self) -> Story {
        self.story
    }
}

/// Page of stories with the given ids
pub fn page_of(ids: &[&str], page: u32, nb_pages: u32) -> SearchPage {
    SearchPage { hits: ids.iter().map(|id| StoryBuilder::new(id).build()).collect(), page, nb_pages }
}

/// Session whose fetcher is a channel: every request lands on the returned receiver
pub type ChannelSession = SearchSession<Sender<FetchRequest>, MemoryTermStore>;

pub fn channel_session(store: MemoryTermStore) -> (ChannelSession, Receiver<FetchRequest>) {
    let (tx, rx) = mpsc::channel();
    let session = SearchSession::new(tx, store, "React");
    (session, rx)
}

/// Answer a request successfully with the given story ids
pub fn answer(request: FetchRequest, ids: &[&str], nb_pages: u32) -> FetchCompletion {
    let page = request.locator.page();
    FetchCompletion::success(request, page_of(ids, page, nb_pages))
}
