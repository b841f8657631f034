//! Ask input and output types.

use super::conversation::ConversationError;
use parley_domain::DialogueResponse;
use tokio::task::JoinHandle;

/// Options for [`ConversationController::ask`](super::conversation::ConversationController::ask).
///
/// Defaults: show the user message, show the replies, wait for every reply
/// to be displayed, label the user message with the sent text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOptions {
    /// Do not append the user message to the list.
    pub hide_message: bool,
    /// Do not display the endpoint's replies.
    pub hide_response: bool,
    /// Return only after every reply has been displayed. When `false`, the
    /// replies are displayed by a background task and `ask` returns as soon
    /// as the endpoint answered.
    pub wait_responses: bool,
    /// Text displayed for the user message. Defaults to the sent text; set it
    /// when the sent text is a payload (e.g. `/affirm` sent for "Yes").
    pub label: Option<String>,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            hide_message: false,
            hide_response: false,
            wait_responses: true,
            label: None,
        }
    }
}

impl AskOptions {
    /// Neither the utterance nor its replies are shown.
    pub fn hidden() -> Self {
        Self {
            hide_message: true,
            hide_response: true,
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn hide_message(mut self) -> Self {
        self.hide_message = true;
        self
    }

    pub fn hide_response(mut self) -> Self {
        self.hide_response = true;
        self
    }

    /// Return once the endpoint answered and display replies in a spawned task.
    ///
    /// Replies of overlapping background asks may interleave in the list;
    /// each ask's own replies stay in order.
    pub fn in_background(mut self) -> Self {
        self.wait_responses = false;
        self
    }
}

/// Result of an ask.
#[derive(Debug, Default)]
pub struct AskOutcome {
    /// Raw fragments returned by the endpoint (empty for ignored input).
    pub responses: Vec<DialogueResponse>,
    /// Background display task, present when replies are still being loaded.
    pub pending: Option<JoinHandle<Result<(), ConversationError>>>,
}

impl AskOutcome {
    pub(crate) fn completed(responses: Vec<DialogueResponse>) -> Self {
        Self {
            responses,
            pending: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Wait for the background display task, if any, and surface its error.
    pub async fn finish(self) -> Result<Vec<DialogueResponse>, ConversationError> {
        if let Some(handle) = self.pending {
            handle
                .await
                .map_err(|e| ConversationError::Background(e.to_string()))??;
        }
        Ok(self.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AskOptions::default();
        assert!(!options.hide_message);
        assert!(!options.hide_response);
        assert!(options.wait_responses);
        assert!(options.label.is_none());
    }

    #[test]
    fn test_builders() {
        let options = AskOptions::default()
            .with_label("Yes")
            .hide_response()
            .in_background();
        assert_eq!(options.label.as_deref(), Some("Yes"));
        assert!(options.hide_response);
        assert!(!options.wait_responses);
        assert!(!options.hide_message);

        let hidden = AskOptions::hidden();
        assert!(hidden.hide_message && hidden.hide_response);
    }

    #[tokio::test]
    async fn test_finish_without_pending() {
        let outcome = AskOutcome::completed(vec![DialogueResponse::text("ok")]);
        assert!(!outcome.is_pending());
        assert_eq!(outcome.finish().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finish_surfaces_panics() {
        let handle = tokio::spawn(async {
            let exploded = true;
            assert!(!exploded, "renderer exploded");
            Ok::<(), ConversationError>(())
        });
        let outcome = AskOutcome {
            responses: vec![],
            pending: Some(handle),
        };
        let err = outcome.finish().await.unwrap_err();
        assert!(matches!(err, ConversationError::Background(_)));
    }
}
