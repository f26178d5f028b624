//! Runtime configuration.
//!
//! Values come from three layers, later ones winning:
//! 1. Built-in defaults
//! 2. An optional JSON file passed with `--config`
//! 3. Command-line flags

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::cli::Args;

/// Default log level when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the recipe API, without trailing slash.
    pub base_url: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Log file path. Logging is disabled when unset.
    pub log_file: Option<PathBuf>,
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from CLI arguments, reading `--config` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or is not valid JSON.
    pub fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        config.normalize();
        Ok(config)
    }

    /// Loads configuration from a JSON file. Missing keys take default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Applies command-line overrides on top of the current values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(base_url) = &args.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(timeout) = args.timeout {
            self.timeout_secs = Some(timeout);
        }
        if let Some(log_file) = &args.log_file {
            self.log_file = Some(log_file.clone());
        }
        if let Some(level) = &args.log_level {
            self.log_level.clone_from(level);
        }
    }

    fn normalize(&mut self) {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        // A zero timeout would fail every request; treat it as "no timeout".
        if self.timeout_secs == Some(0) {
            self.timeout_secs = None;
        }
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
