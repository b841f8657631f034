//! Interactive chat module
//!
//! Provides a readline-based chat client that renders the conversation as a
//! terminal transcript.

mod input;
mod renderer;
mod repl;

pub use input::ReplInput;
pub use renderer::{Advance, TranscriptCursor, TranscriptRenderer};
pub use repl::ChatRepl;
