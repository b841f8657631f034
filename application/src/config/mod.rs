//! Application-level configuration.
//!
//! - [`WidgetConfig`] - reply pacing and session bootstrap

pub mod widget_config;

pub use widget_config::{
    BOOTSTRAP_COMMANDS, DEFAULT_FEEDBACK_TIME_MS, DEFAULT_MIN_RESPONSE_TIME_MS, WidgetConfig,
};
