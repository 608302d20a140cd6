// Logging setup
//
// The TUI owns the terminal, so interactive runs log to a file. One-shot
// commands log to stderr. RUST_LOG overrides the default filter.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "feline_fascination=info";
pub const DEFAULT_LOG_FILE: &str = "feline-fascination.log";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// File target, defaulting to the system temp dir
    pub fn file_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => LogTarget::File(path.to_path_buf()),
            None => LogTarget::File(std::env::temp_dir().join(DEFAULT_LOG_FILE)),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// so buffered file output is flushed.
pub fn init(target: LogTarget) -> Result<Option<WorkerGuard>> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path
                .file_name()
                .context("log file path has no file name")?;

            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
            Ok(Some(guard))
        }
    }
}
