//! Message domain.
//!
//! - [`entities::Message`] - a single displayed message and its [`entities::Origin`]
//! - [`list::MessageList`] - the ordered conversation, addressed by [`entities::MessageId`]
//! - [`content::MessageContent`] - what a pending reply resolves to

pub mod content;
pub mod entities;
pub mod list;
