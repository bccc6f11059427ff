use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_story_age;
use crate::models::Story;
use crate::stories::{SortKey, SortState};
use crate::utils::{sanitize_display, truncate_chars};

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(255, 102, 0);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the UI draws, borrowed from the app for one frame
pub struct RenderState<'a> {
    pub search_term: &'a str,
    pub recent_searches: &'a [String],
    pub stories: &'a [&'a Story],
    pub selected_idx: usize,
    pub sort: SortState,
    pub is_loading: bool,
    pub is_error: bool,
    pub has_more: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_box(frame, layout.search_area, state.search_term);
    render_recent_searches(frame, layout.recent_area, state.recent_searches);
    render_results_list(frame, layout.results_area, state.stories, state.selected_idx, state.sort);
    render_preview(frame, layout.preview_area, state.stories.get(state.selected_idx).copied());
    render_status_bar(frame, layout.status_area, state);
}

fn render_search_box(frame: &mut Frame, area: Rect, search_term: &str) {
    let line = Line::from(vec![
        Span::raw(sanitize_display(search_term)),
        Span::styled("█", Style::default().fg(ACCENT)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" Search "),
    );

    frame.render_widget(paragraph, area);
}

fn render_recent_searches(frame: &mut Frame, area: Rect, recent_searches: &[String]) {
    let mut spans = vec![Span::styled(" Previous: ", Style::default().fg(MUTED))];

    if recent_searches.is_empty() {
        spans.push(Span::styled("none yet", Style::default().fg(MUTED)));
    } else {
        for (idx, term) in recent_searches.iter().enumerate() {
            spans.push(Span::styled(format!("Alt+{} ", idx + 1), Style::default().fg(MUTED)));
            spans.push(Span::styled(
                truncate_chars(&sanitize_display(term), 20),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("  "));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn sort_title(sort: SortState) -> String {
    if sort.key == SortKey::Relevance && !sort.reverse {
        return " Results ".to_string();
    }
    let arrow = if sort.reverse { "↑" } else { "↓" };
    format!(" Results · {} {} ", sort.key.label(), arrow)
}

fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    stories: &[&Story],
    selected_idx: usize,
    sort: SortState,
) {
    let items: Vec<ListItem> = stories
        .iter()
        .enumerate()
        .map(|(idx, story)| {
            let content = format!(
                "{:<50} {:<15} {:>5}c {:>5}p",
                truncate_chars(&sanitize_display(&story.title), 50),
                truncate_chars(&sanitize_display(&story.author), 15),
                story.comment_count,
                story.point_count
            );

            let style = if idx == selected_idx {
                Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(sort_title(sort)),
    );

    frame.render_widget(list, area);
}

fn render_preview(frame: &mut Frame, area: Rect, story: Option<&Story>) {
    let content = if let Some(story) = story {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(MUTED));
        let age = format_story_age(story.created_at.as_ref(), &Utc::now());

        Text::from(vec![
            Line::from(Span::styled(
                sanitize_display(&story.title),
                Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![label("Author: "), Span::raw(sanitize_display(&story.author))]),
            Line::from(vec![label("Posted: "), Span::raw(age)]),
            Line::from(vec![label("Points: "), Span::raw(story.point_count.to_string())]),
            Line::from(vec![label("Comments: "), Span::raw(story.comment_count.to_string())]),
            Line::from(""),
            Line::from(vec![label("Link: "), Span::raw(sanitize_display(&story.link()))]),
            Line::from(vec![label("Discussion: "), Span::raw(story.discussion_url())]),
        ])
    } else {
        Text::from("No story selected")
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Story "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let base = Style::default().fg(BRIGHT).bg(BAR_BG);

    // A failed fetch stays visible while a transient message is shown
    let (status_text, style) = if state.is_error {
        let retry =
            if state.has_more { "Enter: search | Ctrl+L: retry more" } else { "Enter: retry" };
        let text = match state.status_message {
            Some(message) => format!(" {} | Something went wrong ... | {} ", message.text, retry),
            None => format!(" Something went wrong ... | {} ", retry),
        };
        (text, Style::default().fg(ERROR).bg(BAR_BG))
    } else if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => Color::Rgb(16, 185, 129),
            MessageType::Error => ERROR,
        };
        (format!(" {} ", message.text), Style::default().fg(color).bg(BAR_BG))
    } else if state.is_loading {
        (" Loading ... | Ctrl+C: quit ".to_string(), base)
    } else {
        let mut parts = vec![format!("{} stories", state.stories.len())];

        if !state.stories.is_empty() {
            parts.push(format!("story {}/{}", state.selected_idx + 1, state.stories.len()));
        }

        parts.push("Enter: search".to_string());
        if state.has_more {
            parts.push("Ctrl+L: more".to_string());
        }
        parts.push("Ctrl+D: dismiss".to_string());
        parts.push("F1-F5: sort".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), base)
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
