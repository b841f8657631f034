//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Replies rendered as a transcript
    Text,
    /// Raw reply fragments as returned by the endpoint
    Json,
}

/// CLI arguments for parley
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(author, version, about = "Terminal chat client for conversational assistants")]
#[command(long_about = r#"
Parley talks to a conversational assistant over its REST webhook.

When started, a session is opened by sending the bootstrap commands
(/restart, /session_start by default) without showing them. Replies are
displayed one after another, each held in a loading state for a short
minimum time.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. PARLEY_* env vars   e.g. PARLEY_ENDPOINT__URL
3. ./parley.toml       Project-level config
4. ~/.config/parley/config.toml   Global config

Example:
  parley
  parley --url http://localhost:5005/webhooks/rest/webhook "Hello"
  parley --output json "What can you do?"
"#)]
pub struct Cli {
    /// Send a single message, print the replies and exit
    pub message: Option<String>,

    /// Dialogue endpoint webhook URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Conversation identifier sent with each message
    #[arg(long, value_name = "ID")]
    pub sender: Option<String>,

    /// Output format (one-shot mode)
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Do not open a session on startup
    #[arg(long)]
    pub no_start: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore discovered config files and environment variables
    /// (an explicit --config file is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
