//! REPL (Read-Eval-Print Loop) for interactive chat

use super::input::ReplInput;
use super::renderer::TranscriptRenderer;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use parley_application::{AskOptions, ConversationController, ConversationError};
use parley_domain::SessionStatus;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::warn;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ConversationController,
    config: ReplConfig,
    auto_start: bool,
}

impl ChatRepl {
    pub fn new(controller: ConversationController, config: ReplConfig) -> Self {
        Self {
            controller,
            config,
            auto_start: true,
        }
    }

    /// Set whether to open the session before the first prompt
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;
        let mut renderer =
            TranscriptRenderer::new(self.controller.subscribe(), self.config.show_progress);

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if self.auto_start {
            self.start_session(&mut renderer).await;
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.trim());

                    let messages = self.controller.messages();
                    match ReplInput::parse(&line, messages.last_options()) {
                        ReplInput::Quit => {
                            println!("Bye!");
                            break;
                        }
                        ReplInput::Help => self.print_help(),
                        ReplInput::Start => self.start_session(&mut renderer).await,
                        ReplInput::Stop => {
                            if self.controller.stop() {
                                println!("{}", "Session stopped.".dimmed());
                            } else {
                                println!("No session to stop.");
                            }
                        }
                        ReplInput::Status => {
                            println!("{}", ConsoleFormatter::format_status(self.controller.status()));
                        }
                        ReplInput::Options => match messages.last_options() {
                            Some(options) => println!("{}", ConsoleFormatter::format_options(options)),
                            None => println!("The assistant offered no options."),
                        },
                        ReplInput::Select(option) => {
                            let options = AskOptions::default().with_label(option.title.clone());
                            self.say(&mut renderer, &option.payload, options).await;
                        }
                        ReplInput::Say(text) => {
                            self.say(&mut renderer, text, AskOptions::default()).await;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.controller.stop();

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn start_session(&self, renderer: &mut TranscriptRenderer) {
        match renderer.follow(self.controller.start()).await {
            Ok(true) => println!("{}", "Session started.".dimmed()),
            Ok(false) => println!("{}", ConsoleFormatter::format_status(self.controller.status())),
            Err(e) => self.report(renderer, "Could not start the session", e).await,
        }
    }

    async fn say(&self, renderer: &mut TranscriptRenderer, text: &str, options: AskOptions) {
        if self.controller.status() != SessionStatus::Started {
            println!("No session is open. Type /start first.");
            return;
        }
        if let Err(e) = renderer.follow(self.controller.ask(text, options)).await {
            self.report(renderer, "The assistant could not be reached", e).await;
        }
    }

    /// Surface a failure inside the conversation
    async fn report(&self, renderer: &mut TranscriptRenderer, context: &str, error: ConversationError) {
        warn!("{}: {}", context, error);
        let notice = if error.is_timeout() {
            format!("{}: the request timed out.", context)
        } else {
            format!("{}: {}", context, error)
        };
        if let Err(e) = renderer.follow(self.controller.feedback(notice)).await {
            eprintln!("Error: {}", e);
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("Parley - Chat"));
        println!();
        self.print_help();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /start           - Open a session");
        println!("  /stop            - Close the session and clear the conversation");
        println!("  /status          - Show the session status");
        println!("  /options         - Show the options of the latest reply");
        println!("  <number>         - Pick an option of the latest reply");
        println!("  /help, /h, /?    - Show this help");
        println!("  /quit, /exit, /q - Exit chat");
        println!("Any other /command is sent to the assistant as typed.");
        println!();
    }
}
