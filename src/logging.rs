//! # Logging
//!
//! The TUI owns stdout, so `tracing` output goes to a file instead:
//! `--log-file`, or `splitbill.log` in the platform data directory.
//!
//! The filter comes from `RUST_LOG` when set, otherwise `splitbill=info`
//! (`splitbill=debug` with `--debug`).

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file location.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "splitbill")
        .context("Failed to determine application data directory")?;
    Ok(dirs.data_dir().join("splitbill.log"))
}

fn filter(debug: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("splitbill=debug,warn")
        } else {
            EnvFilter::new("splitbill=info,warn")
        }
    })
}

/// Install the global subscriber, appending to `path`.
pub fn init(path: &Path, debug: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path_file_name() {
        if let Ok(path) = default_log_path() {
            assert!(path.ends_with("splitbill.log"));
        }
    }

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("logs").join("splitbill.log");

        // Another test may already own the global subscriber; the file is
        // opened either way.
        let _ = init(&path, true);
        assert!(path.exists());
    }
}
