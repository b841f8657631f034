//! Presentation-level configuration
//!
//! Configuration for REPL behavior and terminal rendering.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while a reply is loading
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            color: true,
        }
    }
}

impl ReplConfig {
    /// History location: the configured file, else the platform data dir
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(file) => Some(expand_home(file)),
            None => dirs::data_dir().map(|p| p.join("parley").join("history.txt")),
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
