//! Renders the message list as an append-only terminal transcript.
//!
//! The terminal cannot redraw earlier lines, so a message is printed once,
//! when it is final, and never before every message above it is final.
//! A loading placeholder is shown as a spinner instead.

use crate::output::console::ConsoleFormatter;
use crate::progress::LoadingIndicator;
use parley_domain::{Message, MessageId, MessageList, Origin};
use std::future::Future;
use tokio::sync::watch;

/// What became printable since the last call to [`TranscriptCursor::advance`]
#[derive(Debug, Default, PartialEq)]
pub struct Advance {
    pub ready: Vec<Message>,
    /// Origin of the placeholder blocking further output, if any
    pub waiting: Option<Origin>,
}

/// Tracks the last message written to the terminal.
///
/// Relies on ids increasing along the list, which holds because messages are
/// only appended and replacements keep their id.
#[derive(Debug, Default, Clone, Copy)]
pub struct TranscriptCursor {
    last: Option<MessageId>,
}

impl TranscriptCursor {
    pub fn advance(&mut self, list: &MessageList) -> Advance {
        let mut advance = Advance::default();
        for message in list {
            let Some(id) = message.id else { continue };
            if self.last.is_some_and(|last| id <= last) {
                continue;
            }
            if message.is_placeholder() {
                advance.waiting = Some(message.origin);
                break;
            }
            advance.ready.push(message.clone());
            self.last = Some(id);
        }
        advance
    }

    pub fn last(&self) -> Option<MessageId> {
        self.last
    }
}

/// Follows a [`MessageList`] channel and prints it
pub struct TranscriptRenderer {
    updates: watch::Receiver<MessageList>,
    cursor: TranscriptCursor,
    indicator: LoadingIndicator,
}

impl TranscriptRenderer {
    pub fn new(updates: watch::Receiver<MessageList>, show_progress: bool) -> Self {
        Self {
            updates,
            cursor: TranscriptCursor::default(),
            indicator: LoadingIndicator::new(show_progress),
        }
    }

    /// Drive `work` to completion, printing the list as it changes
    pub async fn follow<F: Future>(&mut self, work: F) -> F::Output {
        let mut work = std::pin::pin!(work);
        loop {
            tokio::select! {
                biased;
                output = &mut work => {
                    self.flush();
                    self.indicator.hide();
                    return output;
                }
                changed = self.updates.changed() => {
                    if changed.is_err() {
                        let output = work.await;
                        self.indicator.hide();
                        return output;
                    }
                    self.flush();
                }
            }
        }
    }

    /// Print everything that is final
    pub fn flush(&mut self) {
        let list = self.updates.borrow_and_update().clone();
        let advance = self.cursor.advance(&list);
        for message in &advance.ready {
            self.indicator.println(&ConsoleFormatter::format_message(message));
        }
        match advance.waiting {
            Some(Origin::Feedback) => self.indicator.show("…"),
            Some(_) => self.indicator.show("typing"),
            None => self.indicator.hide(),
        }
    }

    pub fn last_rendered(&self) -> Option<MessageId> {
        self.cursor.last()
    }
}
