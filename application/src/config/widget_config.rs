//! Widget parameters: reply pacing and session bootstrap.
//!
//! [`WidgetConfig`] groups the static parameters that control how the
//! [`ConversationController`](crate::use_cases::conversation::ConversationController)
//! paces replies and opens a session. These are application-layer concerns,
//! not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum time an assistant reply stays in its loading state.
pub const DEFAULT_MIN_RESPONSE_TIME_MS: u64 = 1000;

/// Minimum time a feedback notice stays in its loading state.
pub const DEFAULT_FEEDBACK_TIME_MS: u64 = 500;

/// Commands sent (hidden) when a session starts: reset the tracker, then
/// open a fresh session.
pub const BOOTSTRAP_COMMANDS: [&str; 2] = ["/restart", "/session_start"];

/// Reply pacing and bootstrap parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Floor applied to the first assistant reply of each ask.
    pub min_response_time: Duration,
    /// Floor applied to feedback notices.
    pub feedback_time: Duration,
    /// Utterances issued by `start()`, in order.
    pub bootstrap_commands: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            min_response_time: Duration::from_millis(DEFAULT_MIN_RESPONSE_TIME_MS),
            feedback_time: Duration::from_millis(DEFAULT_FEEDBACK_TIME_MS),
            bootstrap_commands: BOOTSTRAP_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl WidgetConfig {
    // ==================== Builder Methods ====================

    pub fn with_min_response_time(mut self, delay: Duration) -> Self {
        self.min_response_time = delay;
        self
    }

    pub fn with_feedback_time(mut self, delay: Duration) -> Self {
        self.feedback_time = delay;
        self
    }

    pub fn with_bootstrap_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bootstrap_commands = commands.into_iter().map(Into::into).collect();
        self
    }
}
