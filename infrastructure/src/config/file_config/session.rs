//! Session configuration from TOML (`[session]` section)

use parley_application::config::BOOTSTRAP_COMMANDS;
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Hidden utterances sent by `start`, in order
    pub bootstrap_commands: Vec<String>,
    /// Start the session as soon as the client opens
    pub auto_start: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            bootstrap_commands: BOOTSTRAP_COMMANDS.iter().map(|c| c.to_string()).collect(),
            auto_start: true,
        }
    }
}
