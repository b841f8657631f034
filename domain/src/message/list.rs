//! Ordered message sequence of a conversation

use super::entities::{Message, MessageId, MessageOption, Origin};

/// The ordered list of displayed messages (Entity)
///
/// New messages are only ever appended. Placeholders are later replaced in
/// place or removed, addressed by their [`MessageId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageList {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and assign its id
    pub fn push(&mut self, mut message: Message) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        message.id = Some(id);
        self.messages.push(message);
        id
    }

    /// Replace the message with `id` in place, keeping the id.
    ///
    /// Returns `false` when no such message exists (e.g. the list was cleared
    /// in the meantime); the list is left untouched in that case.
    pub fn replace(&mut self, id: MessageId, mut message: Message) -> bool {
        match self.position(id) {
            Some(index) => {
                message.id = Some(id);
                self.messages[index] = message;
                true
            }
            None => false,
        }
    }

    /// Remove the message with `id`, returning whether it was present
    pub fn remove(&mut self, id: MessageId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.messages.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every message. Ids keep counting up.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == Some(id))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    /// Number of placeholders currently shown
    pub fn loading_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_placeholder()).count()
    }

    /// Options of the most recent assistant reply that offers any
    pub fn last_options(&self) -> Option<&[MessageOption]> {
        self.messages
            .iter()
            .rev()
            .filter(|m| m.origin == Origin::Assistant && !m.is_placeholder())
            .find_map(|m| m.options.as_deref().filter(|opts| !opts.is_empty()))
    }

    fn position(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|m| m.id == Some(id))
    }
}

impl<'a> IntoIterator for &'a MessageList {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut list = MessageList::new();
        let a = list.push(Message::user("a"));
        let b = list.push(Message::user("b"));
        assert!(a < b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(b).unwrap().content, "b");
    }

    #[test]
    fn test_replace_keeps_position_and_id() {
        let mut list = MessageList::new();
        list.push(Message::user("question"));
        let placeholder = list.push(Message::placeholder(Origin::Assistant));
        list.push(Message::user("later"));

        assert!(list.replace(placeholder, Message::assistant("answer")));

        let contents: Vec<_> = list.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["question", "answer", "later"]);
        assert_eq!(list.as_slice()[1].id, Some(placeholder));
        assert_eq!(list.loading_count(), 0);
    }

    #[test]
    fn test_remove_placeholder() {
        let mut list = MessageList::new();
        list.push(Message::user("question"));
        let placeholder = list.push(Message::placeholder(Origin::Assistant));
        assert_eq!(list.loading_count(), 1);

        assert!(list.remove(placeholder));
        assert_eq!(list.len(), 1);
        assert!(!list.remove(placeholder));
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut list = MessageList::new();
        let stale = list.push(Message::placeholder(Origin::Assistant));
        list.clear();
        let fresh = list.push(Message::user("new session"));

        assert_ne!(stale, fresh);
        assert!(!list.replace(stale, Message::assistant("late reply")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].content, "new session");
    }

    #[test]
    fn test_last_options_skips_plain_replies() {
        let mut list = MessageList::new();
        assert!(list.last_options().is_none());

        list.push(
            Message::assistant("Pick")
                .with_options(vec![MessageOption::new("Yes", "/affirm")]),
        );
        list.push(Message::user("hmm"));
        list.push(Message::assistant("no buttons here"));

        let options = list.last_options().unwrap();
        assert_eq!(options[0].title, "Yes");
    }
}
