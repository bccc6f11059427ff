//! Terminal output sanitization for remote content
//!
//! Titles, authors and urls come straight from the search API and are printed
//! by the `search` command and drawn by the TUI. Escape sequences in them could
//! move the cursor or recolour the terminal, so everything remote goes through
//! [`sanitize_display`] first.

/// Strips ANSI CSI escape codes and control characters, and flattens line breaks.
///
/// Result rows are single-line, so newlines, carriage returns and tabs become
/// spaces.
///
/// # Examples
///
/// ```
/// use hacker_stories::utils::terminal::sanitize_display;
///
/// assert_eq!(sanitize_display("\x1b[31mShow HN\x1b[0m:\nmy\tproject"), "Show HN: my project");
/// ```
pub fn sanitize_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI: ESC [ params final-letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch == '\n' || ch == '\r' || ch == '\t' {
            result.push(' ');
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Truncate to at most `max` characters, marking the cut with `…`
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max - 1).collect();
    truncated.push('…');
    truncated
}
