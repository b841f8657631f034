//! Dialogue endpoint configuration from TOML (`[endpoint]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default webhook of a locally running dialogue server
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5005/webhooks/rest/webhook";

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Webhook receiving `{"sender", "message", "metadata"}` posts
    pub url: String,
    /// Conversation identifier sent with every utterance
    pub sender: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.to_string(),
            sender: "parley".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileEndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(super) fn has_http_scheme(&self) -> bool {
        let url = self.url.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }
}
