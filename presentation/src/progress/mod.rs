//! Progress indicators

mod indicator;

pub use indicator::LoadingIndicator;
