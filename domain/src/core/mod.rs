//! Core domain concepts shared across all subdomains.
//!
//! - [`utterance::Utterance`] - validated text sent to the dialogue endpoint
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod utterance;
