//! Observable owner of the conversation's [`MessageList`].
//!
//! The list lives inside a `tokio::sync::watch` channel. Every mutation goes
//! through this type, which serializes concurrent edits under the channel's
//! lock and wakes subscribers (renderers) after each change.

use parley_domain::{Message, MessageId, MessageList};
use std::sync::Arc;
use tokio::sync::watch;

/// Shared handle to the conversation's message list.
#[derive(Clone)]
pub struct MessageStore {
    tx: Arc<watch::Sender<MessageList>>,
}

impl MessageStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(MessageList::new());
        Self { tx: Arc::new(tx) }
    }

    /// Apply an arbitrary edit and notify subscribers.
    pub fn update<R>(&self, edit: impl FnOnce(&mut MessageList) -> R) -> R {
        let mut result = None;
        self.tx.send_modify(|list| result = Some(edit(list)));
        result.unwrap_or_else(|| unreachable!("send_modify runs the edit exactly once"))
    }

    /// Append a message, returning the id assigned by the list.
    pub fn push(&self, message: Message) -> MessageId {
        self.update(|list| list.push(message))
    }

    /// Replace a message in place. Subscribers are only woken on success.
    pub fn replace(&self, id: MessageId, message: Message) -> bool {
        self.tx.send_if_modified(|list| list.replace(id, message))
    }

    /// Remove a message. Subscribers are only woken on success.
    pub fn remove(&self, id: MessageId) -> bool {
        self.tx.send_if_modified(|list| list.remove(id))
    }

    pub fn clear(&self) {
        self.tx.send_if_modified(|list| {
            let had_messages = !list.is_empty();
            list.clear();
            had_messages
        });
    }

    /// Copy of the current list.
    pub fn snapshot(&self) -> MessageList {
        self.tx.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Receive a notification after every change.
    pub fn subscribe(&self) -> watch::Receiver<MessageList> {
        self.tx.subscribe()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStore")
            .field("len", &self.len())
            .finish()
    }
}
