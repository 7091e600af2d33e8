use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// Where log lines go. The TUI owns the screen, so it logs to a file.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub fn log_file_path() -> PathBuf {
    let mut p = crate::state::config_dir();
    p.push("status-board.log");
    p
}

/// Explicit level wins, then RUST_LOG, then `DEFAULT_FILTER`.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(l) => EnvFilter::try_new(l).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

pub fn init(target: LogTarget, level: Option<&str>) -> Result<()> {
    let filter = build_filter(level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match target {
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))?
        }
    }
    if let Some(l) = level.filter(|l| EnvFilter::try_new(l).is_err()) {
        tracing::warn!(filter = l, default = DEFAULT_FILTER, "invalid log filter, using default");
    }
    Ok(())
}
