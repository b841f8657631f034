//! Message domain entities

use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    User,
    Assistant,
    /// Local notices generated by the widget itself (never sent to the endpoint)
    Feedback,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::User => "user",
            Origin::Assistant => "assistant",
            Origin::Feedback => "feedback",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a message within a [`MessageList`](super::list::MessageList).
///
/// Assigned on push. Ids are never reused by the same list, even across
/// `clear()`, so an update addressed to a cleared message cannot land on a
/// newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub(crate) u64);

impl MessageId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A selectable option attached to an assistant reply (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageOption {
    /// Text shown to the user
    pub title: String,
    /// Utterance sent back to the endpoint when the option is picked
    pub payload: String,
}

impl MessageOption {
    pub fn new(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            payload: payload.into(),
        }
    }
}

/// Structured command carried by an assistant reply (Value Object)
///
/// The meaning of `kind` and `params` belongs to the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub kind: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

impl Command {
    pub fn new(kind: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }
}

/// A message displayed in the conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unset until the message is pushed into a list
    pub id: Option<MessageId>,
    pub origin: Origin,
    pub content: String,
    pub loading: bool,
    pub options: Option<Vec<MessageOption>>,
    pub command: Option<Command>,
}

impl Message {
    fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self {
            id: None,
            origin,
            content: content.into(),
            loading: false,
            options: None,
            command: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Origin::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Origin::Assistant, content)
    }

    pub fn feedback(content: impl Into<String>) -> Self {
        Self::new(Origin::Feedback, content)
    }

    /// Empty loading message shown while a reply is pending
    pub fn placeholder(origin: Origin) -> Self {
        Self {
            loading: true,
            ..Self::new(origin, String::new())
        }
    }

    pub fn with_options(mut self, options: Vec<MessageOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.loading
    }

    pub fn options(&self) -> &[MessageOption] {
        self.options.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_constructors_set_origin() {
        assert_eq!(Message::user("hi").origin, Origin::User);
        assert_eq!(Message::assistant("hi").origin, Origin::Assistant);
        assert_eq!(Message::feedback("hi").origin, Origin::Feedback);
        assert!(!Message::user("hi").loading);
    }

    #[test]
    fn test_placeholder_is_loading_and_empty() {
        let msg = Message::placeholder(Origin::Assistant);
        assert!(msg.is_placeholder());
        assert!(msg.content.is_empty());
        assert!(msg.id.is_none());
    }

    #[test]
    fn test_builder_attaches_options_and_command() {
        let msg = Message::assistant("Pick one")
            .with_options(vec![MessageOption::new("Yes", "/affirm")])
            .with_command(Command::new("open_url", json!({"url": "https://example.com"})));

        assert_eq!(msg.options().len(), 1);
        assert_eq!(msg.options()[0].payload, "/affirm");
        assert_eq!(msg.command.as_ref().unwrap().kind, "open_url");
    }

    #[test]
    fn test_options_defaults_to_empty_slice() {
        assert!(Message::assistant("plain").options().is_empty());
    }

    #[test]
    fn test_origin_serde_snake_case() {
        let json = serde_json::to_string(&Origin::Feedback).unwrap();
        assert_eq!(json, "\"feedback\"");
    }
}
