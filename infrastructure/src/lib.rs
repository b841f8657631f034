//! Infrastructure layer for parley
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dialogue;
pub mod logging;
pub mod metadata;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileEndpointConfig, FileLoggingConfig, FileReplConfig,
    FileSessionConfig, FileTimingConfig, FileTranscriptConfig,
};
pub use dialogue::RestDialogueGateway;
pub use logging::{JsonlConversationLogger, TranscriptProcessor};
pub use metadata::StaticMetadata;
