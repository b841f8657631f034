//! Utterance value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text submitted to the dialogue endpoint (Value Object)
///
/// Either something the user typed or the payload of a selected option.
/// Empty input never reaches the endpoint; whitespace is sent as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    text: String,
}

impl Utterance {
    /// Validate raw input, rejecting empty text
    pub fn parse(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_inner(self) -> String {
        self.text
    }

    /// Slash-prefixed utterances address the dialogue engine directly
    /// (intents such as `/restart`) rather than carrying user prose.
    pub fn is_command(&self) -> bool {
        self.text.starts_with('/')
    }
}

impl std::fmt::Display for Utterance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<&str> for Utterance {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Utterance::parse(s)
    }
}
