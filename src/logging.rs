use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Initialise the global tracing subscriber.
///
/// The log level is controlled by `RUST_LOG` (e.g. `RUST_LOG=hacker_stories=debug`),
/// falling back to `default_directive` when unset. With `log_file` set, output is
/// appended to that file (the interactive UI owns the terminal); otherwise it
/// goes to stderr.
///
/// Subsequent calls after the first are no-ops.
pub fn init_tracing(log_file: Option<&Path>, default_directive: &str) -> Result<()> {
    let file = match log_file {
        Some(path) => Some(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => None,
    };

    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
        let builder = tracing_subscriber::fmt().with_target(false).with_env_filter(filter);

        let _ = match file {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        };
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("test.log");

        assert!(init_tracing(Some(&log), "info").is_ok());
        assert!(init_tracing(None, "warn").is_ok());
        tracing::info!("emitted after init");
    }

    #[test]
    fn test_init_tracing_bad_log_path() {
        let dir = TempDir::new().unwrap();
        let log = dir.path().join("missing").join("test.log");

        assert!(init_tracing(Some(&log), "info").is_err());
    }
}
