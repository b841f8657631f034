//! Message processor port
//!
//! Processors are post-processing hooks run over every finalized message the
//! [`MessageLoader`](crate::use_cases::load_message::MessageLoader) produces,
//! before the message replaces its placeholder.

use async_trait::async_trait;
use parley_domain::Message;
use thiserror::Error;

/// Failure reported by a processor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Processor '{processor}' failed: {message}")]
pub struct ProcessorError {
    pub processor: String,
    pub message: String,
}

impl ProcessorError {
    pub fn new(processor: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            processor: processor.into(),
            message: message.into(),
        }
    }
}

/// Post-processing hook over finalized messages.
///
/// Processors observe the message; they cannot change what gets displayed.
#[async_trait]
pub trait MessageProcessor: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    async fn process(&self, message: &Message) -> Result<(), ProcessorError>;
}
