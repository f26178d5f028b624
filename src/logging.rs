//! Diagnostic logging setup.
//!
//! The terminal is owned by the TUI, so log records never go to stdout or
//! stderr. When a log file is configured, `env_logger` writes to it; otherwise
//! no logger is installed and the `log` macros are no-ops.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Installs the global logger according to `config`.
///
/// `RUST_LOG`, when set, refines the configured level.
/// Returns `Ok(false)` when logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    build_logger(path, &config.log_level)?
        .try_init()
        .context("Failed to install logger")?;

    log::info!(
        "{} {} starting, api={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );
    Ok(true)
}

/// Builds an `env_logger` that appends to `path`.
fn build_logger(path: &Path, level: &str) -> Result<Builder> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let mut builder = Builder::new();
    builder
        .parse_filters(level)
        .parse_default_env()
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    Ok(builder)
}
