//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask;
pub mod conversation;
pub mod load_message;
