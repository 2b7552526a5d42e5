//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::config::Endpoint;

/// Mestre IA - turn class recordings into summaries
#[derive(Parser, Debug)]
#[command(name = "mestre-ia")]
#[command(version)]
#[command(about = "Upload a class recording and get an AI-generated lecture summary")]
#[command(long_about = None)]
pub struct Cli {
    /// Audio file to summarize, taken as-is like a file picker choice
    #[arg(value_name = "FILE", conflicts_with = "drop")]
    pub file: Option<PathBuf>,

    /// Dropped file; only the first is considered, and only if it is audio
    #[arg(long, value_name = "PATH")]
    pub drop: Vec<PathBuf>,

    /// Declared media type for the file (default: guessed from extension)
    #[arg(long, value_name = "TYPE")]
    pub mime: Option<String>,

    /// Base URL of the summarization service
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Copy the summary to the clipboard
    #[arg(short = 'c', long)]
    pub clipboard: bool,

    /// Also show desktop notifications
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session: pick, drop, clear, generate, copy
    Session,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed one-shot options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub file: Option<PathBuf>,
    pub drop: Vec<PathBuf>,
    pub mime: Option<String>,
    pub endpoint: Endpoint,
    pub clipboard: bool,
    pub notify: bool,
}

/// Parsed session options
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub endpoint: Endpoint,
    pub clipboard: bool,
    pub notify: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_url", "clipboard", "notify"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
