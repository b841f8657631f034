//! Session lifecycle status

use serde::{Deserialize, Serialize};

/// Lifecycle of a widget session.
///
/// ```text
/// NotStarted --start()--> Loading --bootstrap done--> Started --stop()--> NotStarted
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    NotStarted,
    /// Bootstrap commands are in flight
    Loading,
    Started,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::NotStarted => "not_started",
            SessionStatus::Loading => "loading",
            SessionStatus::Started => "started",
        }
    }

    pub fn can_start(&self) -> bool {
        matches!(self, SessionStatus::NotStarted)
    }

    pub fn can_stop(&self) -> bool {
        matches!(self, SessionStatus::Started)
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        assert_eq!(SessionStatus::default(), SessionStatus::NotStarted);
    }

    #[test]
    fn test_guards() {
        assert!(SessionStatus::NotStarted.can_start());
        assert!(!SessionStatus::Loading.can_start());
        assert!(!SessionStatus::Started.can_start());

        assert!(SessionStatus::Started.can_stop());
        assert!(!SessionStatus::Loading.can_stop());
        assert!(!SessionStatus::NotStarted.can_stop());
    }
}
