//! Dialogue endpoint adapters

mod rest_gateway;

pub use rest_gateway::RestDialogueGateway;
