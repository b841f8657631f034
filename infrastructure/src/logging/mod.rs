//! Logging infrastructure: the structured conversation transcript.
//!
//! Provides [`JsonlConversationLogger`], a JSONL file writer that implements
//! the [`ConversationLogger`](parley_application::ConversationLogger) port,
//! and [`TranscriptProcessor`], which feeds finalized messages into any
//! conversation logger.

mod jsonl_logger;
mod transcript_processor;

pub use jsonl_logger::JsonlConversationLogger;
pub use transcript_processor::TranscriptProcessor;
