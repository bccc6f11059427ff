use crate::models::Story;

/// Accumulated search results and the status of the latest request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoriesState {
    pub items: Vec<Story>,
    pub current_page: u32,
    pub is_loading: bool,
    pub is_error: bool,
}

/// Every transition the result set can take
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesAction {
    FetchStart,
    FetchSuccess { page: u32, list: Vec<Story> },
    FetchFailure,
    Remove { id: String },
}

impl StoriesState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action in place.
    ///
    /// A page-0 success replaces the list (a fresh search), any later page is
    /// appended. Failures keep whatever pages were already loaded.
    pub fn apply(&mut self, action: StoriesAction) {
        match action {
            StoriesAction::FetchStart => {
                self.is_loading = true;
                self.is_error = false;
            }
            StoriesAction::FetchSuccess { page, list } => {
                self.is_loading = false;
                self.is_error = false;
                if page == 0 {
                    self.items = list;
                } else {
                    self.items.extend(list);
                }
                self.current_page = page;
            }
            StoriesAction::FetchFailure => {
                self.is_loading = false;
                self.is_error = true;
            }
            StoriesAction::Remove { id } => {
                self.items.retain(|story| story.id != id);
            }
        }
    }

    /// Consuming form of [`StoriesState::apply`]
    pub fn reduce(mut self, action: StoriesAction) -> Self {
        self.apply(action);
        self
    }
}
