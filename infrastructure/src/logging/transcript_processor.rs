//! Message processor that records finalized messages in the transcript

use async_trait::async_trait;
use parley_application::{ConversationEvent, ConversationLogger, MessageProcessor, ProcessorError};
use parley_domain::Message;
use serde_json::json;
use std::sync::Arc;

/// Writes a `message_finalized` event for every reply and notice shown.
pub struct TranscriptProcessor {
    logger: Arc<dyn ConversationLogger>,
}

impl TranscriptProcessor {
    pub fn new(logger: Arc<dyn ConversationLogger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl MessageProcessor for TranscriptProcessor {
    fn name(&self) -> &str {
        "transcript"
    }

    async fn process(&self, message: &Message) -> Result<(), ProcessorError> {
        self.logger.log(ConversationEvent::new(
            "message_finalized",
            json!({
                "id": message.id.map(|id| id.value()),
                "origin": message.origin.as_str(),
                "text": message.content,
                "options": message.options(),
                "command": message.command,
            }),
        ));
        Ok(())
    }
}
