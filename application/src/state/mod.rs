//! Observable conversation state.
//!
//! - [`message_store::MessageStore`] - the message list and its single mutation entry point

pub mod message_store;

pub use message_store::MessageStore;
