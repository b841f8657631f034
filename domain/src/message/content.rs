//! Resolved content of a pending message

use super::entities::{Command, Message, MessageOption, Origin};
use crate::dialogue::response::DialogueResponse;

/// What a placeholder's content source resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    /// Plain text (local feedback, echoed input)
    Text(String),
    /// A fragment returned by the dialogue endpoint
    Response(DialogueResponse),
}

impl MessageContent {
    /// Build the final message for `origin`.
    ///
    /// Only assistant replies keep the structured parts of a fragment:
    /// buttons become selectable options and the custom payload becomes a
    /// [`Command`]. Other origins keep the text alone.
    pub fn finalize(self, origin: Origin) -> Message {
        let response = match self {
            MessageContent::Text(text) => return Message::placeholder(origin).resolved(text),
            MessageContent::Response(response) => response,
        };

        let mut message = Message::placeholder(origin).resolved(response.text.unwrap_or_default());
        if origin != Origin::Assistant {
            return message;
        }

        if let Some(buttons) = response.buttons.filter(|b| !b.is_empty()) {
            message.options = Some(
                buttons
                    .into_iter()
                    .map(|b| MessageOption::new(b.title, b.payload))
                    .collect(),
            );
        }
        if let Some(custom) = response.custom {
            message.command = Some(Command::new(custom.kind, custom.params));
        }
        message
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        MessageContent::Text(text)
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        MessageContent::Text(text.to_string())
    }
}

impl From<DialogueResponse> for MessageContent {
    fn from(response: DialogueResponse) -> Self {
        MessageContent::Response(response)
    }
}

impl Message {
    fn resolved(mut self, content: String) -> Self {
        self.content = content;
        self.loading = false;
        self
    }
}
