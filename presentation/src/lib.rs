//! Presentation layer for parley
//!
//! This crate contains CLI definitions, the console formatter, the loading
//! spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, TranscriptRenderer};
pub use cli::commands::{Cli, OutputFormat};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::LoadingIndicator;
