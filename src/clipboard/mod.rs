//! Copy story links to the system clipboard

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::models::Story;

/// Longest link accepted (browsers cap URLs well below this)
const MAX_LINK_LEN: usize = 64 * 1024;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// A link must be a single non-empty line of bounded length
fn validate_link(link: &str) -> Result<()> {
    if link.is_empty() {
        bail!("Story has no link to copy");
    }
    if link.len() > MAX_LINK_LEN {
        bail!("Link too long for clipboard ({} bytes, max {})", link.len(), MAX_LINK_LEN);
    }
    if link.chars().any(char::is_control) {
        bail!("Link contains control characters");
    }
    Ok(())
}

fn copy_link_with(story: &Story, provider: &mut dyn ClipboardProvider) -> Result<String> {
    let link = story.link();
    validate_link(&link)?;
    provider.set_text(&link)?;
    Ok(link)
}

/// Copy a story's link (its url, or the HN discussion page) to the system clipboard.
///
/// Returns the copied link.
///
/// # Errors
/// Returns error if:
/// - The link is empty, too long or contains control characters
/// - The system clipboard is unavailable (headless environment) or locked
pub fn copy_story_link(story: &Story) -> Result<String> {
    // Validate before touching the clipboard (better errors in headless CI)
    validate_link(&story.link())?;

    let mut clipboard = SystemClipboard::new()?;
    copy_link_with(story, &mut clipboard)
}
