//! Load Message use case.
//!
//! Shows a loading placeholder for a pending reply, waits for the reply and
//! a minimum display delay, runs the post-processing chain, then swaps the
//! placeholder for the finalized message.

use super::conversation::ConversationError;
use crate::ports::message_processor::MessageProcessor;
use crate::state::MessageStore;
use parley_domain::util::preview;
use parley_domain::{Message, MessageContent, MessageId, Origin};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Use case for turning a pending reply into a displayed message.
///
/// Lifecycle of one [`load_message`](Self::load_message) call:
/// 1. Append a placeholder for `origin`
/// 2. Await the content source
/// 3. Sleep until `min_delay` has elapsed since step 1
/// 4. Remove the placeholder if the content resolved to nothing
/// 5. Otherwise finalize the message and run every processor, in order
/// 6. Replace the placeholder with the finalized message
///
/// The placeholder never outlives the call: errors and cancellation remove
/// it before returning.
#[derive(Clone)]
pub struct MessageLoader {
    store: MessageStore,
    processors: Arc<Vec<Arc<dyn MessageProcessor>>>,
}

impl MessageLoader {
    pub fn new(store: MessageStore) -> Self {
        Self {
            store,
            processors: Arc::new(Vec::new()),
        }
    }

    /// Append a processor to the end of the chain.
    pub fn with_processor(mut self, processor: Arc<dyn MessageProcessor>) -> Self {
        Arc::make_mut(&mut self.processors).push(processor);
        self
    }

    pub fn processor_names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Load one message.
    ///
    /// Returns the id of the committed message, or `None` when the content
    /// resolved to nothing, the load was cancelled, or the placeholder was
    /// cleared from the list before the message could be committed.
    pub async fn load_message<F>(
        &self,
        origin: Origin,
        content: F,
        min_delay: Duration,
        cancel: &CancellationToken,
    ) -> Result<Option<MessageId>, ConversationError>
    where
        F: Future<Output = Result<Option<MessageContent>, ConversationError>>,
    {
        let placeholder = self.store.push(Message::placeholder(origin));
        let deadline = Instant::now() + min_delay;

        let resolved = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Load of {} {} cancelled", origin, placeholder);
                self.store.remove(placeholder);
                return Ok(None);
            }
            resolved = self.resolve(placeholder, origin, content, deadline) => resolved,
        };

        let message = match resolved {
            Ok(Some(message)) => message,
            Ok(None) => {
                debug!("Content for {} resolved to nothing", placeholder);
                self.store.remove(placeholder);
                return Ok(None);
            }
            Err(e) => {
                self.store.remove(placeholder);
                return Err(e);
            }
        };

        debug!(
            "Committing {} message {}: {}",
            origin,
            placeholder,
            preview(&message.content, 80)
        );
        if self.store.replace(placeholder, message) {
            Ok(Some(placeholder))
        } else {
            debug!("Placeholder {} no longer in the list; dropping reply", placeholder);
            Ok(None)
        }
    }

    async fn resolve<F>(
        &self,
        placeholder: MessageId,
        origin: Origin,
        content: F,
        deadline: Instant,
    ) -> Result<Option<Message>, ConversationError>
    where
        F: Future<Output = Result<Option<MessageContent>, ConversationError>>,
    {
        let content = content.await?;
        tokio::time::sleep_until(deadline).await;

        let Some(content) = content else {
            return Ok(None);
        };

        let mut message = content.finalize(origin);
        message.id = Some(placeholder);
        for processor in self.processors.iter() {
            processor.process(&message).await?;
        }
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::message_processor::ProcessorError;
    use async_trait::async_trait;
    use parley_domain::DialogueResponse;
    use std::future::ready;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    // ==================== Test Mocks ====================

    struct RecordingProcessor {
        name: &'static str,
        seen: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl MessageProcessor for RecordingProcessor {
        fn name(&self) -> &str {
            self.name
        }

        async fn process(&self, message: &Message) -> Result<(), ProcessorError> {
            self.seen
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, message.content));
            Ok(())
        }
    }

    struct FailingProcessor;

    #[async_trait]
    impl MessageProcessor for FailingProcessor {
        fn name(&self) -> &str {
            "failing"
        }

        async fn process(&self, _message: &Message) -> Result<(), ProcessorError> {
            Err(ProcessorError::new("failing", "boom"))
        }
    }

    struct StoreInspector {
        store: MessageStore,
        seen_lengths: Arc<Mutex<Vec<usize>>>,
    }

    #[async_trait]
    impl MessageProcessor for StoreInspector {
        fn name(&self) -> &str {
            "inspector"
        }

        async fn process(&self, _message: &Message) -> Result<(), ProcessorError> {
            let list = self.store.snapshot();
            self.seen_lengths.lock().unwrap().push(list.loading_count());
            Ok(())
        }
    }

    fn text(content: &str) -> impl Future<Output = Result<Option<MessageContent>, ConversationError>> {
        ready(Ok(Some(MessageContent::from(content))))
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_resolved_content_replaces_placeholder() {
        let loader = MessageLoader::new(MessageStore::new());
        let token = CancellationToken::new();

        let id = loader
            .load_message(Origin::Assistant, text("Hello!"), Duration::ZERO, &token)
            .await
            .unwrap()
            .unwrap();

        let list = loader.store().snapshot();
        assert_eq!(list.len(), 1);
        let message = list.get(id).unwrap();
        assert_eq!(message.content, "Hello!");
        assert!(!message.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_min_delay_is_enforced() {
        let loader = MessageLoader::new(MessageStore::new());
        let token = CancellationToken::new();
        let started = Instant::now();

        loader
            .load_message(
                Origin::Feedback,
                text("Saved"),
                Duration::from_millis(750),
                &token,
            )
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_content_is_not_delayed_further() {
        let loader = MessageLoader::new(MessageStore::new());
        let token = CancellationToken::new();
        let started = Instant::now();

        let slow = async {
            tokio::time::sleep(Duration::from_millis(2000)).await;
            Ok(Some(MessageContent::from("late")))
        };
        loader
            .load_message(Origin::Assistant, slow, Duration::from_millis(500), &token)
            .await
            .unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_placeholder_while_pending() {
        let store = MessageStore::new();
        store.push(Message::user("question"));
        let loader = MessageLoader::new(store.clone());
        let mut updates = store.subscribe();
        updates.mark_unchanged();

        let (tx, rx) = oneshot::channel::<Option<MessageContent>>();
        let task = tokio::spawn(async move {
            let token = CancellationToken::new();
            loader
                .load_message(
                    Origin::Assistant,
                    async move { Ok(rx.await.ok().flatten()) },
                    Duration::from_millis(100),
                    &token,
                )
                .await
        });

        updates.changed().await.unwrap();
        assert_eq!(store.snapshot().loading_count(), 1);
        assert_eq!(store.len(), 2);

        tx.send(Some(MessageContent::from("answer"))).unwrap();
        task.await.unwrap().unwrap();

        let list = store.snapshot();
        assert_eq!(list.loading_count(), 0);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[1].content, "answer");
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_content_removes_placeholder() {
        let store = MessageStore::new();
        store.push(Message::user("question"));
        let loader = MessageLoader::new(store.clone());
        let token = CancellationToken::new();
        let before = store.len();

        let result = loader
            .load_message(
                Origin::Assistant,
                ready(Ok(None)),
                Duration::from_millis(300),
                &token,
            )
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(store.len(), before);
        assert_eq!(store.snapshot().loading_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_processors_run_in_order_before_commit() {
        let store = MessageStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let loading_seen = Arc::new(Mutex::new(Vec::new()));
        let loader = MessageLoader::new(store.clone())
            .with_processor(Arc::new(RecordingProcessor {
                name: "first",
                seen: seen.clone(),
            }))
            .with_processor(Arc::new(StoreInspector {
                store: store.clone(),
                seen_lengths: loading_seen.clone(),
            }))
            .with_processor(Arc::new(RecordingProcessor {
                name: "second",
                seen: seen.clone(),
            }));
        let token = CancellationToken::new();

        assert_eq!(loader.processor_names(), vec!["first", "inspector", "second"]);

        loader
            .load_message(Origin::Assistant, text("hi"), Duration::ZERO, &token)
            .await
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["first:hi", "second:hi"]);
        // the placeholder was still displayed while processors ran
        assert_eq!(*loading_seen.lock().unwrap(), vec![1]);
        assert_eq!(store.snapshot().loading_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_assistant_response_extracts_options() {
        let loader = MessageLoader::new(MessageStore::new());
        let token = CancellationToken::new();
        let response = DialogueResponse::text("Pick one")
            .with_buttons(vec![parley_domain::Button::new("Yes", "/affirm")]);

        let id = loader
            .load_message(
                Origin::Assistant,
                ready(Ok(Some(response.into()))),
                Duration::ZERO,
                &token,
            )
            .await
            .unwrap()
            .unwrap();

        let list = loader.store().snapshot();
        assert_eq!(list.get(id).unwrap().options()[0].payload, "/affirm");
    }

    #[tokio::test(start_paused = true)]
    async fn test_processor_failure_removes_placeholder() {
        let store = MessageStore::new();
        let loader = MessageLoader::new(store.clone()).with_processor(Arc::new(FailingProcessor));
        let token = CancellationToken::new();

        let err = loader
            .load_message(Origin::Assistant, text("hi"), Duration::ZERO, &token)
            .await
            .unwrap_err();

        assert!(matches!(err, ConversationError::Processor(ref e) if e.processor == "failing"));
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_content_failure_removes_placeholder() {
        let store = MessageStore::new();
        let loader = MessageLoader::new(store.clone());
        let token = CancellationToken::new();

        let failing = ready(Err(ConversationError::Gateway(
            crate::ports::dialogue_gateway::GatewayError::Timeout,
        )));
        let err = loader
            .load_message(Origin::Assistant, failing, Duration::from_millis(100), &token)
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_drops_placeholder() {
        let store = MessageStore::new();
        let loader = MessageLoader::new(store.clone());
        let token = CancellationToken::new();

        let canceller = {
            let token = token.clone();
            let store = store.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                token.cancel();
                store.clear();
            }
        };

        let (result, ()) = tokio::join!(
            loader.load_message(
                Origin::Assistant,
                text("too late"),
                Duration::from_millis(1000),
                &token
            ),
            canceller
        );

        assert!(result.unwrap().is_none());
        assert!(store.is_empty());
    }
}
