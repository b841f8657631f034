//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! ([`WidgetConfig`]) at the composition root.

mod endpoint;
mod repl;
mod session;
mod timing;
mod transcript;

pub use endpoint::{DEFAULT_ENDPOINT_URL, FileEndpointConfig};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;
pub use timing::FileTimingConfig;
pub use transcript::{FileLoggingConfig, FileTranscriptConfig};

use parley_application::WidgetConfig;
use parley_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Dialogue endpoint
    pub endpoint: FileEndpointConfig,
    /// Reply pacing
    pub timing: FileTimingConfig,
    /// Session bootstrap
    pub session: FileSessionConfig,
    /// Static metadata sent with every utterance
    pub metadata: BTreeMap<String, Value>,
    /// JSONL transcript output
    pub transcript: FileTranscriptConfig,
    /// Diagnostic log output
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Endpoint
        if self.endpoint.url.trim().is_empty() {
            issues.push(empty_value("endpoint.url"));
        } else if !self.endpoint.has_http_scheme() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "endpoint.url".to_string(),
                    value: self.endpoint.url.clone(),
                },
                format!(
                    "endpoint.url: '{}' is not an http(s) URL",
                    self.endpoint.url
                ),
            ));
        }
        if self.endpoint.sender.trim().is_empty() {
            issues.push(empty_value("endpoint.sender"));
        }
        if self.endpoint.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "endpoint.timeout_secs".to_string(),
                },
                "endpoint.timeout_secs cannot be 0",
            ));
        }

        // 2. Delays
        for (field, millis) in [
            ("timing.min_response_time_ms", self.timing.min_response_time_ms),
            ("timing.feedback_time_ms", self.timing.feedback_time_ms),
        ] {
            if millis > timing::MAX_REASONABLE_DELAY_MS {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ExcessiveDelay {
                        field: field.to_string(),
                        millis,
                    },
                    format!("{}: {}ms delays every reply noticeably", field, millis),
                ));
            }
        }

        // 3. Bootstrap sequence
        let commands = &self.session.bootstrap_commands;
        if commands.iter().any(|c| c.trim().is_empty()) {
            issues.push(empty_value("session.bootstrap_commands"));
        }
        if commands.len() != 2 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnusualBootstrap {
                    count: commands.len(),
                },
                format!(
                    "session.bootstrap_commands: expected 2 commands (restart, session start), got {}",
                    commands.len()
                ),
            ));
        }

        issues
    }

    /// Reply pacing and bootstrap parameters for the conversation controller
    pub fn to_widget_config(&self) -> WidgetConfig {
        WidgetConfig::default()
            .with_min_response_time(Duration::from_millis(self.timing.min_response_time_ms))
            .with_feedback_time(Duration::from_millis(self.timing.feedback_time_ms))
            .with_bootstrap_commands(self.session.bootstrap_commands.iter().cloned())
    }

    /// The `[metadata]` table as a JSON object, `null` when empty
    pub fn metadata_value(&self) -> Value {
        if self.metadata.is_empty() {
            Value::Null
        } else {
            Value::Object(self.metadata.clone().into_iter().collect())
        }
    }
}

fn empty_value(field: &str) -> ConfigIssue {
    ConfigIssue::error(
        ConfigIssueCode::EmptyValue {
            field: field.to_string(),
        },
        format!("{} cannot be empty", field),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::Severity;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "https://bot.example.com/webhooks/rest/webhook"
sender = "visitor-42"
timeout_secs = 5

[timing]
min_response_time_ms = 250
feedback_time_ms = 100

[session]
bootstrap_commands = ["/restart", "/greet"]
auto_start = false

[metadata]
locale = "fr"
page = { path = "/pricing" }

[transcript]
path = "parley.conversation.jsonl"

[repl]
show_progress = false
history_file = "~/.local/share/parley/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.sender, "visitor-42");
        assert_eq!(config.endpoint.timeout(), Duration::from_secs(5));
        assert_eq!(config.session.bootstrap_commands[1], "/greet");
        assert!(!config.session.auto_start);
        assert_eq!(config.metadata["locale"], "fr");
        assert_eq!(config.metadata["page"]["path"], "/pricing");
        assert_eq!(
            config.transcript.path.as_deref(),
            Some("parley.conversation.jsonl")
        );
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[timing]
min_response_time_ms = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.min_response_time_ms, 0);
        // Defaults should apply
        assert_eq!(config.timing.feedback_time_ms, 500);
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT_URL);
        assert!(config.session.auto_start);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.endpoint.sender, "parley");
        assert_eq!(config.session.bootstrap_commands, vec!["/restart", "/session_start"]);
        assert!(config.metadata.is_empty());
        assert!(config.transcript.path.is_none());
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let mut config = FileConfig::default();
        config.endpoint.url = "localhost:5005".to_string();
        config.endpoint.sender = "  ".to_string();
        config.endpoint.timeout_secs = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidUrl { value, .. } if value == "localhost:5005"
        ));
        assert!(matches!(
            &issues[1].code,
            ConfigIssueCode::EmptyValue { field } if field == "endpoint.sender"
        ));
    }

    #[test]
    fn test_validate_warns_on_pacing_and_bootstrap() {
        let mut config = FileConfig::default();
        config.timing.min_response_time_ms = 30_000;
        config.session.bootstrap_commands = vec!["/restart".to_string()];

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::ExcessiveDelay { millis: 30_000, .. }
        ));
        assert!(matches!(
            issues[1].code,
            ConfigIssueCode::UnusualBootstrap { count: 1 }
        ));
    }

    #[test]
    fn test_to_widget_config() {
        let mut config = FileConfig::default();
        config.timing.min_response_time_ms = 200;
        config.session.bootstrap_commands = vec!["/hello".to_string(), "/go".to_string()];

        let widget = config.to_widget_config();
        assert_eq!(widget.min_response_time, Duration::from_millis(200));
        assert_eq!(widget.feedback_time, Duration::from_millis(500));
        assert_eq!(widget.bootstrap_commands, vec!["/hello", "/go"]);
    }

    #[test]
    fn test_metadata_value() {
        let mut config = FileConfig::default();
        assert!(config.metadata_value().is_null());

        config
            .metadata
            .insert("locale".to_string(), Value::String("en".to_string()));
        assert_eq!(config.metadata_value(), serde_json::json!({"locale": "en"}));
    }
}
