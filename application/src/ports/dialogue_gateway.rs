//! Dialogue Gateway port
//!
//! Defines the interface for submitting utterances to the remote dialogue
//! endpoint.

use async_trait::async_trait;
use parley_domain::DialogueResponse;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during dialogue gateway operations
///
/// `Clone` so a single network result can be observed by several waiters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the dialogue endpoint
///
/// This port defines how the application layer talks to the dialogue engine.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DialogueGateway: Send + Sync {
    /// Submit an utterance plus metadata and get the ordered reply fragments
    async fn send(
        &self,
        message: &str,
        metadata: &Value,
    ) -> Result<Vec<DialogueResponse>, GatewayError>;
}
