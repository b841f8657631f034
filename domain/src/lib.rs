//! Domain layer for parley
//!
//! This crate contains the entities and value objects of a chat widget
//! conversation. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Messages
//!
//! A conversation is an ordered [`MessageList`] of [`Message`]s, each tagged
//! with its [`Origin`] (user, assistant, feedback). While a reply is pending
//! the list holds a *placeholder*: a loading message that is later replaced
//! by the finalized reply or removed.
//!
//! ## Dialogue fragments
//!
//! The remote dialogue endpoint answers a user message with an ordered list of
//! [`DialogueResponse`] fragments. Assistant fragments may carry selectable
//! options (buttons) and a structured [`Command`].
//!
//! ## Session lifecycle
//!
//! [`SessionStatus`] moves linearly `NotStarted -> Loading -> Started` and back
//! to `NotStarted` when the session is stopped.

pub mod config;
pub mod core;
pub mod dialogue;
pub mod message;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, utterance::Utterance};
pub use dialogue::response::{Button, CustomPayload, DialogueResponse};
pub use message::{
    content::MessageContent,
    entities::{Command, Message, MessageId, MessageOption, Origin},
    list::MessageList,
};
pub use session::status::SessionStatus;
