use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::stories::SortKey;

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ClearSearch,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Submit,
    LoadMore,
    Dismiss,
    CopyUrl,
    Sort(SortKey),
    /// Re-issue the n-th previous search (0 = oldest shown)
    RepeatRecent(usize),
    UpdateSearch(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearSearch,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,

        // Search session
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::LoadMore,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) | (KeyCode::Delete, _) => Action::Dismiss,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyUrl,
        (KeyCode::Char(c @ '1'..='5'), KeyModifiers::ALT) => {
            Action::RepeatRecent(c as usize - '1' as usize)
        }

        // Column sort
        (KeyCode::F(1), _) => Action::Sort(SortKey::Relevance),
        (KeyCode::F(2), _) => Action::Sort(SortKey::Title),
        (KeyCode::F(3), _) => Action::Sort(SortKey::Author),
        (KeyCode::F(4), _) => Action::Sort(SortKey::Comments),
        (KeyCode::F(5), _) => Action::Sort(SortKey::Points),

        // Search input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
