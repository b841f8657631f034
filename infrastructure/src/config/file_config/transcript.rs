//! Transcript and diagnostics output from TOML (`[transcript]`, `[logging]`)

use serde::{Deserialize, Serialize};

/// Raw transcript configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// JSONL file receiving conversation events. Disabled when unset.
    pub path: Option<String>,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rotated diagnostic logs. Logs go to stderr when unset.
    pub dir: Option<String>,
}
