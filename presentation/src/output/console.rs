//! Console output formatter for conversation messages

use colored::Colorize;
use parley_domain::util::truncate_str;
use parley_domain::{ConfigIssue, DialogueResponse, Message, MessageOption, Origin, SessionStatus};

/// Longest command parameter dump shown inline
const MAX_PARAMS_WIDTH: usize = 120;

/// Formats messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force plain output when colors are disabled in the config
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a finalized message with its options and command
    pub fn format_message(message: &Message) -> String {
        let mut output = match message.origin {
            Origin::User => format!("{} {}", "you ›".green().bold(), message.content),
            Origin::Assistant => format!(
                "{} {}",
                "bot ›".cyan().bold(),
                Self::indent_tail(&message.content, "      ")
            ),
            Origin::Feedback => format!("{} {}", "  ! ".yellow().bold(), message.content.yellow()),
        };

        if !message.options().is_empty() {
            output.push('\n');
            output.push_str(&Self::format_options(message.options()));
        }

        if let Some(command) = &message.command {
            let params = command.params.to_string();
            output.push_str(&format!(
                "\n      {} {} {}",
                "⚙".dimmed(),
                command.kind.bold(),
                truncate_str(&params, MAX_PARAMS_WIDTH).dimmed()
            ));
        }

        output
    }

    /// Numbered option list, selectable by typing the number
    pub fn format_options(options: &[MessageOption]) -> String {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("      {} {}", format!("[{}]", i + 1).cyan(), option.title))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format raw fragments as JSON
    pub fn format_json(responses: &[DialogueResponse]) -> String {
        serde_json::to_string_pretty(responses).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn format_status(status: SessionStatus) -> String {
        let label = match status {
            SessionStatus::NotStarted => status.as_str().dimmed(),
            SessionStatus::Loading => status.as_str().yellow(),
            SessionStatus::Started => status.as_str().green(),
        };
        format!("{} {}", "Session:".cyan().bold(), label)
    }

    pub fn format_issue(issue: &ConfigIssue) -> String {
        if issue.is_error() {
            format!("{} {}", "error:".red().bold(), issue.message)
        } else {
            format!("{} {}", "warning:".yellow().bold(), issue.message)
        }
    }

    pub fn header(title: &str) -> String {
        let line = "─".repeat(45);
        format!("╭{}╮\n│{:^45}│\n╰{}╯", line, title, line)
    }

    /// Indent every line but the first
    fn indent_tail(text: &str, prefix: &str) -> String {
        text.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    line.to_string()
                } else {
                    format!("{}{}", prefix, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_domain::{Command, ConfigIssueCode};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_user_and_assistant() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_message(&Message::user("hi")),
            "you › hi"
        );
        assert_eq!(
            ConsoleFormatter::format_message(&Message::assistant("line one\nline two")),
            "bot › line one\n      line two"
        );
    }

    #[test]
    fn test_format_options_numbered() {
        plain();
        let message = Message::assistant("Continue?").with_options(vec![
            MessageOption::new("Yes", "/affirm"),
            MessageOption::new("No", "/deny"),
        ]);
        let output = ConsoleFormatter::format_message(&message);
        assert!(output.contains("[1] Yes"));
        assert!(output.contains("[2] No"));
        assert!(!output.contains("/affirm"));
    }

    #[test]
    fn test_format_command() {
        plain();
        let message = Message::assistant("Opening")
            .with_command(Command::new("open_url", serde_json::json!({"url": "x"})));
        let output = ConsoleFormatter::format_message(&message);
        assert!(output.ends_with(r#"⚙ open_url {"url":"x"}"#));
    }

    #[test]
    fn test_format_issue() {
        plain();
        let issue = ConfigIssue::warning(
            ConfigIssueCode::UnusualBootstrap { count: 1 },
            "expected 2 commands",
        );
        assert_eq!(
            ConsoleFormatter::format_issue(&issue),
            "warning: expected 2 commands"
        );
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&[DialogueResponse::text("hello")]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["text"], "hello");
    }
}
