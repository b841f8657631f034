//! Dialogue endpoint wire types.
//!
//! - [`response::DialogueResponse`] - one fragment of the endpoint's reply

pub mod response;
