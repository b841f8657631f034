//! Configuration file loading for parley
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `PARLEY_*` environment variables (`PARLEY_ENDPOINT__URL`, ...)
//! 3. Project root: `./parley.toml` or `./.parley.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/parley/config.toml`
//! 5. Fallback: `~/.config/parley/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_ENDPOINT_URL, FileConfig, FileEndpointConfig, FileLoggingConfig, FileReplConfig,
    FileSessionConfig, FileTimingConfig, FileTranscriptConfig,
};
pub use loader::ConfigLoader;
