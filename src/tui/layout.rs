use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom
pub struct AppLayout {
    pub search_area: Rect,
    pub recent_area: Rect,
    pub results_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create the layout:
    /// - Search input: 3 rows (bordered)
    /// - Previous searches: 1 row
    /// - Results list (65% width, left) beside the story preview (35%, right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search input
                Constraint::Length(1), // Previous searches
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // Results list
                Constraint::Percentage(35), // Preview pane
            ])
            .split(vertical_chunks[2]);

        Self {
            search_area: vertical_chunks[0],
            recent_area: vertical_chunks[1],
            results_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            status_area: vertical_chunks[3],
        }
    }
}
