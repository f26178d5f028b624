//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// `MealScout` - browse TheMealDB recipes from the terminal
///
/// Search recipes by name, pull a random one, and open full recipe details
/// with ingredients and instructions.
#[derive(Parser, Debug, Default)]
#[command(name = "mealscout", version, about, long_about = None)]
pub struct Args {
    /// Base URL of the recipe API (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}
