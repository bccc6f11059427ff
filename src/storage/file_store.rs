//! File-backed store: load once, atomic write on every set

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use super::TermStore;

pub const STORE_FILENAME: &str = "store.json";

/// JSON object of string values kept in a single file
#[derive(Debug)]
pub struct FileTermStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileTermStore {
    /// Open the store at `path`, creating the parent directory if missing.
    ///
    /// A missing file is an empty store. A corrupted file is logged and treated
    /// as empty; it is replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create store directory: {}", parent.display())
            })?;
        }

        let values = if path.exists() {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file: {}", path.display()))?;
            match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring corrupted store file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Open `store.json` inside `state_dir`
    pub fn open_in(state_dir: &Path) -> Result<Self> {
        Self::open(state_dir.join(STORE_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        let temp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&self.values).context("Failed to serialize store")?;
        fs::write(&temp, json).context("Failed to write store temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename store temp file")?;
        Ok(())
    }
}

impl TermStore for FileTermStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}
