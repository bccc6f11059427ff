//! Runtime configuration, resolved from command-line flags and environment variables

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Args;

use crate::query::DEFAULT_API_BASE;
use crate::utils::get_state_dir;

/// Term searched for when no term has been stored yet
pub const DEFAULT_TERM: &str = "React";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const LOG_FILENAME: &str = "hacker-stories.log";

/// Options shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Base URL of the HN search API
    #[arg(long, env = "HN_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Search term used when none has been stored
    #[arg(long, env = "HN_DEFAULT_TERM", default_value = DEFAULT_TERM, global = true)]
    pub default_term: String,

    /// Directory for the stored search term and the log file
    #[arg(long, env = "HN_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub default_term: String,
    pub state_dir: PathBuf,
    pub timeout: Duration,
}

impl ConfigArgs {
    pub fn resolve(self) -> Result<Config> {
        if self.api_base.trim().is_empty() {
            bail!("API base URL cannot be empty");
        }
        if self.timeout_secs == 0 {
            bail!("Timeout must be at least one second");
        }

        let state_dir = match self.state_dir {
            Some(dir) => dir,
            None => get_state_dir()?,
        };

        Ok(Config {
            api_base: self.api_base,
            default_term: self.default_term,
            state_dir,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

impl Config {
    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILENAME)
    }
}
