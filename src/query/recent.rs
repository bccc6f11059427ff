use super::locator::RequestLocator;

/// Maximum number of previous searches offered for quick re-issue
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Derive the list of previous searches from the request history.
///
/// Consecutive requests for the same term (a search followed by "more" pages of
/// it, or the same term submitted twice in a row) collapse to one entry. A term
/// that comes back after a different search is listed again. The newest term is
/// the one currently on screen, so it is left out, and only the
/// [`MAX_RECENT_SEARCHES`] entries before it are kept, oldest first.
///
/// # Examples
///
/// ```
/// use hacker_stories::{RequestLocator, recent_searches};
///
/// let history: Vec<_> = ["a", "a", "b", "b", "b", "c"]
///     .iter()
///     .map(|t| RequestLocator::build(*t, 0))
///     .collect();
/// assert_eq!(recent_searches(&history), vec!["a", "b"]);
/// ```
pub fn recent_searches(history: &[RequestLocator]) -> Vec<String> {
    let mut compressed: Vec<&str> = Vec::new();
    for locator in history {
        let term = locator.extract_term();
        if compressed.last() != Some(&term) {
            compressed.push(term);
        }
    }

    // Current search
    compressed.pop();

    let start = compressed.len().saturating_sub(MAX_RECENT_SEARCHES);
    compressed[start..].iter().map(|term| term.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(terms: &[&str]) -> Vec<RequestLocator> {
        terms.iter().map(|t| RequestLocator::build(*t, 0)).collect()
    }

    #[test]
    fn test_collapses_consecutive_runs() {
        let history = history_of(&["a", "a", "b", "b", "b", "c"]);
        assert_eq!(recent_searches(&history), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_history() {
        assert!(recent_searches(&[]).is_empty());
    }

    #[test]
    fn test_single_locator() {
        assert!(recent_searches(&history_of(&["React"])).is_empty());
    }

    #[test]
    fn test_all_same_term() {
        let history = vec![
            RequestLocator::build("go", 0),
            RequestLocator::build("go", 1),
            RequestLocator::build("go", 2),
            RequestLocator::build("go", 0),
        ];
        assert!(recent_searches(&history).is_empty());
    }

    #[test]
    fn test_keeps_non_adjacent_repeats() {
        let history = history_of(&["a", "b", "a", "c"]);
        assert_eq!(recent_searches(&history), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_pagination_counts_as_one_search() {
        let history = vec![
            RequestLocator::build("React", 0),
            RequestLocator::build("React", 1),
            RequestLocator::build("React", 2),
            RequestLocator::build("rust", 0),
        ];
        assert_eq!(recent_searches(&history), vec!["React"]);
    }

    #[test]
    fn test_limits_to_five_most_recent() {
        let history = history_of(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(recent_searches(&history), vec!["c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_limit_applies_after_compression() {
        let history = history_of(&["a", "b", "b", "c", "c", "c", "d", "e", "e", "f"]);
        assert_eq!(recent_searches(&history), vec!["a", "b", "c", "d", "e"]);
    }
}
