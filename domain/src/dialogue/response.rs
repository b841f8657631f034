//! Response fragments returned by the dialogue endpoint.
//!
//! The endpoint answers each utterance with a JSON array of fragments:
//!
//! ```json
//! [
//!   {"recipient_id": "u1", "text": "Hi! How can I help?"},
//!   {"recipient_id": "u1", "text": "Pick one",
//!    "buttons": [{"title": "Weather", "payload": "/ask_weather"}],
//!    "custom": {"type": "focus_input", "params": {}}}
//! ]
//! ```
//!
//! Unknown fields such as `recipient_id` are ignored.

use serde::{Deserialize, Serialize};

/// A button descriptor attached to a fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub title: String,
    pub payload: String,
}

impl Button {
    pub fn new(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            payload: payload.into(),
        }
    }
}

/// Custom object carrying a command type and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPayload {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A single fragment of the endpoint's reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<Button>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPayload>,
}

impl DialogueResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = Some(buttons);
        self
    }

    pub fn with_custom(mut self, kind: impl Into<String>, params: serde_json::Value) -> Self {
        self.custom = Some(CustomPayload {
            kind: kind.into(),
            params,
        });
        self
    }
}
