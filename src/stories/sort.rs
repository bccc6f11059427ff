use clap::ValueEnum;

use crate::models::Story;

/// Column a result list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Order the API returned (relevance)
    #[default]
    Relevance,
    Title,
    Author,
    Comments,
    Points,
}

impl SortKey {
    pub const ALL: [SortKey; 5] =
        [SortKey::Relevance, SortKey::Title, SortKey::Author, SortKey::Comments, SortKey::Points];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::Comments => "Comments",
            SortKey::Points => "Points",
        }
    }
}

/// Active sort column plus whether the column order is flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortState {
    pub fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    /// Select a column. Selecting the active column again flips its order,
    /// selecting another column starts it in its natural order.
    pub fn toggle(&mut self, key: SortKey) {
        self.reverse = self.key == key && !self.reverse;
        self.key = key;
    }

    /// Sorted view over `items`; the items themselves are left untouched.
    ///
    /// Title and author sort ascending. Comments and points sort descending,
    /// produced by a stable ascending sort followed by a reversal, so equal
    /// counts come out in reverse arrival order.
    pub fn apply<'a>(&self, items: &'a [Story]) -> Vec<&'a Story> {
        let mut sorted: Vec<&Story> = items.iter().collect();
        match self.key {
            SortKey::Relevance => {}
            SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
            SortKey::Comments => {
                sorted.sort_by_key(|story| story.comment_count);
                sorted.reverse();
            }
            SortKey::Points => {
                sorted.sort_by_key(|story| story.point_count);
                sorted.reverse();
            }
        }

        if self.reverse {
            sorted.reverse();
        }
        sorted
    }
}
