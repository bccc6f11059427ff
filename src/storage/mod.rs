//! Key/value storage for the persisted search term
//!
//! The session only needs one string slot (the last search term, under
//! [`SEARCH_TERM_KEY`]). Two stores implement [`TermStore`]:
//! - [`FileTermStore`]: JSON object on disk, rewritten atomically on every set
//! - [`MemoryTermStore`]: in-memory map for tests and one-shot commands
//!
//! Store location: platform-specific state directories
//! - macOS: `~/Library/Application Support/hacker-stories/store.json`
//! - Linux: `~/.local/state/hacker-stories/store.json`
//! - Windows: `%LOCALAPPDATA%\hacker-stories\store.json`

pub mod file_store;

use std::collections::HashMap;

use anyhow::Result;
pub use file_store::{FileTermStore, STORE_FILENAME};

/// Key the search term is stored under
pub const SEARCH_TERM_KEY: &str = "search";

/// Single-slot string persistence, synchronous from the caller's side
pub trait TermStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stored search term, or `default_term` when none (or an empty one) is stored
pub fn stored_term(store: &impl TermStore, default_term: &str) -> String {
    store
        .get(SEARCH_TERM_KEY)
        .filter(|term| !term.is_empty())
        .unwrap_or_else(|| default_term.to_string())
}

/// Non-persistent store
#[derive(Debug, Clone, Default)]
pub struct MemoryTermStore {
    values: HashMap<String, String>,
}

impl MemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a search term
    pub fn with_term(term: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(SEARCH_TERM_KEY.to_string(), term.to_string());
        Self { values }
    }
}

impl TermStore for MemoryTermStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
