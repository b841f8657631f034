//! Widget session domain.
//!
//! - [`status::SessionStatus`] - linear session lifecycle

pub mod status;
