//! REST webhook adapter for the dialogue endpoint.
//!
//! Each utterance is one `POST` of
//! `{"sender": .., "message": .., "metadata": ..}` to the webhook URL; the
//! endpoint answers with a JSON array of reply fragments.

use crate::config::FileEndpointConfig;
use async_trait::async_trait;
use parley_application::{DialogueGateway, GatewayError};
use parley_domain::DialogueResponse;
use parley_domain::util::preview;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct WebhookRequest<'a> {
    sender: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    metadata: &'a Value,
}

/// Dialogue gateway speaking the REST webhook protocol
#[derive(Debug, Clone)]
pub struct RestDialogueGateway {
    client: reqwest::Client,
    url: String,
    sender: String,
}

impl RestDialogueGateway {
    pub fn new(
        url: impl Into<String>,
        sender: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("parley/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            sender: sender.into(),
        })
    }

    pub fn from_config(config: &FileEndpointConfig) -> Result<Self, GatewayError> {
        Self::new(config.url.trim(), config.sender.clone(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }
}

#[async_trait]
impl DialogueGateway for RestDialogueGateway {
    async fn send(
        &self,
        message: &str,
        metadata: &Value,
    ) -> Result<Vec<DialogueResponse>, GatewayError> {
        debug!(message = %preview(message, 60), "Posting utterance");

        let body = WebhookRequest {
            sender: &self.sender,
            message,
            metadata,
        };
        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let fragments: Vec<DialogueResponse> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::InvalidResponse(e.to_string())
            }
        })?;

        debug!(fragments = fragments.len(), "Endpoint replied");
        Ok(fragments)
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}
