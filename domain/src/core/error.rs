//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message is empty")]
    EmptyMessage,
}

impl DomainError {
    /// Check if this error was caused by empty user input
    pub fn is_empty_message(&self) -> bool {
        matches!(self, DomainError::EmptyMessage)
    }
}
