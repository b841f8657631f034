//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod dialogue_gateway;
pub mod message_processor;
pub mod metadata;
