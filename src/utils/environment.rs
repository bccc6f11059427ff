use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory name used under the platform state directory
pub const APP_DIR_NAME: &str = "hacker-stories";

/// Get the default state directory (stored search term, log file).
///
/// Uses the platform state directory where one exists (Linux), otherwise the
/// local data directory.
pub fn get_state_dir() -> Result<PathBuf> {
    let base = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .context("Failed to determine platform state directory")?;
    Ok(base.join(APP_DIR_NAME))
}
