//! TUI application state and event handling.
//!
//! The `App` owns a [`SearchSession`] and maps keyboard actions onto its
//! operations:
//!
//! - **Typing** edits the live search term (persisted as you type)
//! - **Enter** submits it as a new search; **Alt+1..5** re-issues a previous one
//! - **Ctrl+L** loads the next page, **Ctrl+D** dismisses the selected story
//! - **F1..F5** sort the list by column (pressing the same key again flips it)
//!
//! Fetch completions arrive on a channel from the fetch workers and are drained
//! into the session at the top of every loop iteration, before drawing.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_story_link;
use crate::models::Story;
use crate::session::{FetchCompletion, Fetcher, SearchSession};
use crate::storage::TermStore;
use crate::stories::SortState;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest search term accepted from the keyboard
const MAX_TERM_CHARS: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App<F: Fetcher, S: TermStore> {
    session: SearchSession<F, S>,
    completions: Receiver<FetchCompletion>,
    selected_idx: usize,
    sort: SortState,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<F: Fetcher, S: TermStore> App<F, S> {
    pub fn new(session: SearchSession<F, S>, completions: Receiver<FetchCompletion>) -> Self {
        Self {
            session,
            completions,
            selected_idx: 0,
            sort: SortState::default(),
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn session(&self) -> &SearchSession<F, S> {
        &self.session
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Hand every finished fetch to the session
    fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions.try_recv() {
            if self.session.deliver(completion) {
                self.clamp_selection();
                self.needs_redraw = true;
            }
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.drain_completions();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let stories = self.visible_stories();
                let recent = self.session.recent_searches();
                let stories_state = self.session.state();

                terminal.draw(|f| {
                    let state = RenderState {
                        search_term: self.session.term(),
                        recent_searches: &recent,
                        stories: &stories,
                        selected_idx: self.selected_idx,
                        sort: self.sort,
                        is_loading: stories_state.is_loading,
                        is_error: stories_state.is_error,
                        has_more: self.session.has_more(),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Stories in display order
    fn visible_stories(&self) -> Vec<&Story> {
        self.sort.apply(&self.session.state().items)
    }

    fn selected_story(&self) -> Option<&Story> {
        self.visible_stories().get(self.selected_idx).copied()
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        let total_items = self.session.state().items.len();

        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.session.term().is_empty() {
                    self.should_quit = true;
                } else {
                    self.session.set_term("");
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_selection(-1, total_items),
            Action::MoveDown => self.move_selection(1, total_items),
            Action::PageUp => self.move_selection(-10, total_items),
            Action::PageDown => self.move_selection(10, total_items),
            Action::Submit => {
                if self.session.submit() {
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                } else {
                    self.set_status(
                        "✗ Type a search term first",
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                }
            }
            Action::LoadMore => self.load_more(),
            Action::Dismiss => {
                if let Some(id) = self.selected_story().map(|story| story.id.clone()) {
                    self.session.remove_result(&id);
                    self.clamp_selection();
                    self.needs_redraw = true;
                }
            }
            Action::CopyUrl => self.copy_selected_link(),
            Action::Sort(key) => {
                self.sort.toggle(key);
                self.selected_idx = 0;
                self.needs_redraw = true;
            }
            Action::RepeatRecent(idx) => {
                if let Some(term) = self.session.recent_searches().get(idx).cloned() {
                    self.session.repeat_past(&term);
                    self.selected_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    fn load_more(&mut self) {
        // "More" is unavailable while a request is in flight
        if self.session.state().is_loading {
            return;
        }
        if !self.session.has_more() {
            let text = if self.session.state().is_error {
                "✗ Search failed, press Enter to retry"
            } else {
                "No more results"
            };
            self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }
        self.session.load_more();
        self.needs_redraw = true;
    }

    fn copy_selected_link(&mut self) {
        let Some(story) = self.selected_story() else {
            self.set_status("✗ No story to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_story_link(story) {
            Ok(_) => {
                self.set_status("✓ Copied link", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn clamp_selection(&mut self) {
        let total = self.session.state().items.len();
        self.selected_idx = self.selected_idx.min(total.saturating_sub(1));
    }

    fn update_search(&mut self, c: char) {
        let term = self.session.term();
        if term.chars().count() < MAX_TERM_CHARS {
            let updated = format!("{}{}", term, c);
            self.session.set_term(updated);
            self.needs_redraw = true;
        }
    }

    fn delete_char(&mut self) {
        let mut term = self.session.term().to_string();
        if term.pop().is_some() {
            self.session.set_term(term);
            self.needs_redraw = true;
        }
    }
}
