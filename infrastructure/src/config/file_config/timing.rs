//! Reply pacing from TOML (`[timing]` section)

use parley_application::config::{DEFAULT_FEEDBACK_TIME_MS, DEFAULT_MIN_RESPONSE_TIME_MS};
use serde::{Deserialize, Serialize};

/// Delays above this make the widget look stuck
pub(super) const MAX_REASONABLE_DELAY_MS: u64 = 10_000;

/// Raw timing configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTimingConfig {
    /// Minimum time the first reply of an ask stays loading
    pub min_response_time_ms: u64,
    /// Minimum time a feedback notice stays loading
    pub feedback_time_ms: u64,
}

impl Default for FileTimingConfig {
    fn default() -> Self {
        Self {
            min_response_time_ms: DEFAULT_MIN_RESPONSE_TIME_MS,
            feedback_time_ms: DEFAULT_FEEDBACK_TIME_MS,
        }
    }
}
