//! # Logging
//!
//! File-backed `tracing` setup. The TUI owns the terminal, so log lines go to
//! a file instead of stderr.
//!
//! ## File Location
//!
//! ```text
//! ~/.local/share/widgetry/widgetry.log
//! ```
//!
//! The filter is read from `WIDGETRY_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "WIDGETRY_LOG";

const DEFAULT_FILTER: &str = "info";

/// Default log file path in the platform data directory.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "widgetry")
        .context("Could not determine data directory")?;
    Ok(dirs.data_local_dir().join("widgetry.log"))
}

/// Build the filter from `WIDGETRY_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `path` (appending).
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(env_filter())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_ends_with_file_name() {
        let path = default_log_path().expect("log path");
        assert!(path.ends_with("widgetry.log"));
    }

    #[test]
    fn test_init_creates_missing_directories() {
        let temp_dir = tempfile::TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("nested").join("app.log");
        // A second global init in the same process fails; the file is created either way
        let _ = init(&path);
        assert!(path.exists());
    }
}
