//! Conversation controller.
//!
//! Owns the widget's message list and session status, and turns user input
//! into displayed replies:
//!
//! ```text
//! ask(text) ─┬─ push user message (unless hidden)
//!            ├─ send utterance + metadata to the dialogue endpoint (once)
//!            └─ response routine (unless hidden):
//!                 first fragment  → load_message(.., min_response_time)
//!                 other fragments → load_message(.., 0), in order
//! ```

use super::ask::{AskOptions, AskOutcome};
use super::load_message::MessageLoader;
use crate::config::WidgetConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::dialogue_gateway::{DialogueGateway, GatewayError};
use crate::ports::message_processor::{MessageProcessor, ProcessorError};
use crate::ports::metadata::{MetadataProvider, NoMetadata};
use crate::state::MessageStore;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parley_domain::util::preview;
use parley_domain::{
    DialogueResponse, Message, MessageContent, MessageId, MessageList, Origin, SessionStatus,
    Utterance,
};
use std::future::ready;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while conversing.
#[derive(Error, Debug)]
pub enum ConversationError {
    #[error("Dialogue gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Processor(#[from] ProcessorError),

    #[error("Background reply loading failed: {0}")]
    Background(String),
}

impl ConversationError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ConversationError::Gateway(GatewayError::Timeout))
    }
}

/// The endpoint call of one ask, awaited by the caller and the response
/// routine alike.
type SharedRequest = Shared<BoxFuture<'static, Result<Vec<DialogueResponse>, GatewayError>>>;

/// Use case driving a chat widget conversation.
///
/// Cheap to clone; clones share the same list, status and session.
#[derive(Clone)]
pub struct ConversationController {
    gateway: Arc<dyn DialogueGateway>,
    metadata: Arc<dyn MetadataProvider>,
    conversation_logger: Arc<dyn ConversationLogger>,
    loader: MessageLoader,
    store: MessageStore,
    status: Arc<watch::Sender<SessionStatus>>,
    session: Arc<Mutex<CancellationToken>>,
    config: Arc<WidgetConfig>,
}

impl ConversationController {
    pub fn new(gateway: Arc<dyn DialogueGateway>, config: WidgetConfig) -> Self {
        let store = MessageStore::new();
        let (status, _rx) = watch::channel(SessionStatus::NotStarted);
        Self {
            gateway,
            metadata: Arc::new(NoMetadata),
            conversation_logger: Arc::new(NoConversationLogger),
            loader: MessageLoader::new(store.clone()),
            store,
            status: Arc::new(status),
            session: Arc::new(Mutex::new(CancellationToken::new())),
            config: Arc::new(config),
        }
    }

    /// Create with a metadata provider.
    pub fn with_metadata(mut self, metadata: Arc<dyn MetadataProvider>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Append a processor to the post-processing chain.
    pub fn with_processor(mut self, processor: Arc<dyn MessageProcessor>) -> Self {
        self.loader = self.loader.with_processor(processor);
        self
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        *self.status.borrow()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    /// Snapshot of the displayed messages.
    pub fn messages(&self) -> MessageList {
        self.store.snapshot()
    }

    /// Receive the message list after every change.
    pub fn subscribe(&self) -> watch::Receiver<MessageList> {
        self.store.subscribe()
    }

    /// Send an utterance and display the replies.
    ///
    /// Empty input is ignored and yields an empty outcome. Errors from the
    /// endpoint or from a processor are returned; with
    /// `wait_responses == false` errors raised while displaying replies are
    /// reported through [`AskOutcome::finish`].
    pub async fn ask(
        &self,
        message: &str,
        options: AskOptions,
    ) -> Result<AskOutcome, ConversationError> {
        let utterance = match Utterance::parse(message) {
            Ok(utterance) => utterance,
            Err(e) => {
                debug!("Ignoring ask: {}", e);
                return Ok(AskOutcome::default());
            }
        };
        let label = options
            .label
            .clone()
            .unwrap_or_else(|| utterance.as_str().to_string());

        if !options.hide_message {
            self.store.push(Message::user(label.as_str()));
            self.conversation_logger.log(ConversationEvent::new(
                "user_message",
                serde_json::json!({
                    "label": label,
                    "text": utterance.as_str(),
                }),
            ));
        }

        info!("Sending utterance: {}", preview(utterance.as_str(), 80));
        let request = self.request(&utterance);

        if options.hide_response {
            let responses = request.await.inspect_err(|e| self.log_failure(&utterance, e))?;
            debug!("{} hidden fragment(s) for {}", responses.len(), utterance);
            return Ok(AskOutcome::completed(responses));
        }

        let routine = self
            .clone()
            .load_responses(request.clone(), self.session_token());

        if options.wait_responses {
            let displayed = routine.await;
            let responses = request.await.inspect_err(|e| self.log_failure(&utterance, e))?;
            displayed?;
            Ok(AskOutcome::completed(responses))
        } else {
            let pending = tokio::spawn(routine);
            let responses = request.await.inspect_err(|e| self.log_failure(&utterance, e))?;
            Ok(AskOutcome {
                responses,
                pending: Some(pending),
            })
        }
    }

    /// Open the session by sending the bootstrap commands.
    ///
    /// Returns `Ok(false)` without doing anything unless the session is
    /// [`SessionStatus::NotStarted`]. If a bootstrap command fails the status
    /// goes back to `NotStarted`.
    pub async fn start(&self) -> Result<bool, ConversationError> {
        let claimed = self.status.send_if_modified(|status| {
            if status.can_start() {
                *status = SessionStatus::Loading;
                true
            } else {
                false
            }
        });
        if !claimed {
            debug!("start() ignored: session is {}", self.status());
            return Ok(false);
        }

        info!(
            "Starting session with {} bootstrap command(s)",
            self.config.bootstrap_commands.len()
        );
        for command in &self.config.bootstrap_commands {
            if let Err(e) = self.ask(command, AskOptions::hidden()).await {
                warn!("Bootstrap command {} failed: {}", command, e);
                self.status.send_replace(SessionStatus::NotStarted);
                return Err(e);
            }
        }

        self.status.send_replace(SessionStatus::Started);
        self.conversation_logger.log(ConversationEvent::new(
            "session_started",
            serde_json::json!({ "bootstrap": self.config.bootstrap_commands }),
        ));
        Ok(true)
    }

    /// Close the session: cancel in-flight loads and clear the list.
    ///
    /// Returns `false` without doing anything unless the session is
    /// [`SessionStatus::Started`].
    pub fn stop(&self) -> bool {
        let claimed = self.status.send_if_modified(|status| {
            if status.can_stop() {
                *status = SessionStatus::NotStarted;
                true
            } else {
                false
            }
        });
        if !claimed {
            debug!("stop() ignored: session is {}", self.status());
            return false;
        }

        let previous = std::mem::replace(&mut *self.lock_session(), CancellationToken::new());
        previous.cancel();

        let dropped = self.store.len();
        self.store.clear();
        info!("Session stopped, {} message(s) cleared", dropped);
        self.conversation_logger.log(ConversationEvent::new(
            "session_stopped",
            serde_json::json!({ "cleared": dropped }),
        ));
        true
    }

    /// Display a local feedback notice (not sent to the endpoint).
    pub async fn feedback(
        &self,
        content: impl Into<String>,
    ) -> Result<Option<MessageId>, ConversationError> {
        let content = MessageContent::Text(content.into());
        self.loader
            .load_message(
                Origin::Feedback,
                ready(Ok(Some(content))),
                self.config.feedback_time,
                &self.session_token(),
            )
            .await
    }

    fn request(&self, utterance: &Utterance) -> SharedRequest {
        let gateway = Arc::clone(&self.gateway);
        let metadata = self.metadata.metadata();
        let text = utterance.as_str().to_string();
        async move { gateway.send(&text, &metadata).await }
            .boxed()
            .shared()
    }

    /// Display every fragment of `request`, in order.
    ///
    /// The first placeholder appears while the endpoint is still answering.
    async fn load_responses(
        self,
        request: SharedRequest,
        session: CancellationToken,
    ) -> Result<(), ConversationError> {
        let first = request.clone().map(|result| {
            result
                .map(|fragments| fragments.into_iter().next().map(MessageContent::from))
                .map_err(ConversationError::from)
        });
        self.loader
            .load_message(
                Origin::Assistant,
                first,
                self.config.min_response_time,
                &session,
            )
            .await?;

        for fragment in request.await?.into_iter().skip(1) {
            if session.is_cancelled() {
                break;
            }
            self.loader
                .load_message(
                    Origin::Assistant,
                    ready(Ok(Some(MessageContent::from(fragment)))),
                    Duration::ZERO,
                    &session,
                )
                .await?;
        }
        Ok(())
    }

    fn session_token(&self) -> CancellationToken {
        self.lock_session().clone()
    }

    fn lock_session(&self) -> std::sync::MutexGuard<'_, CancellationToken> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn log_failure(&self, utterance: &Utterance, error: &GatewayError) {
        warn!("Dialogue endpoint failed for {}: {}", utterance, error);
        self.conversation_logger.log(ConversationEvent::new(
            "dialogue_error",
            serde_json::json!({
                "text": utterance.as_str(),
                "error": error.to_string(),
            }),
        ));
    }
}
