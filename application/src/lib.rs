//! Application layer for parley
//!
//! This crate contains use cases, port definitions, observable conversation
//! state and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod state;
pub mod use_cases;

// Re-export commonly used types
pub use config::WidgetConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    dialogue_gateway::{DialogueGateway, GatewayError},
    message_processor::{MessageProcessor, ProcessorError},
    metadata::{MetadataProvider, NoMetadata},
};
pub use state::MessageStore;
pub use use_cases::ask::{AskOptions, AskOutcome};
pub use use_cases::conversation::{ConversationController, ConversationError};
pub use use_cases::load_message::MessageLoader;
