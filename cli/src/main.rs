//! CLI entrypoint for parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use parley_application::{AskOptions, ConversationController, ConversationLogger};
use parley_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, RestDialogueGateway, StaticMetadata,
    TranscriptProcessor,
};
use parley_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputFormat, ReplConfig, TranscriptRenderer,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // Load configuration, then apply command-line overrides
    let loaded = match (&cli.config, cli.no_config) {
        (Some(path), true) => ConfigLoader::load_file(path),
        (None, true) => Ok(ConfigLoader::load_defaults()),
        (path, false) => ConfigLoader::load(path.as_ref()),
    };
    let mut config = loaded.map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    if let Some(url) = &cli.url {
        config.endpoint.url = url.clone();
    }
    if let Some(sender) = &cli.sender {
        config.endpoint.sender = sender.clone();
    }

    let _log_guard = init_logging(cli.verbose, &config);
    info!("Starting parley");

    ConsoleFormatter::set_color(config.repl.color);

    let issues = config.validate();
    for issue in &issues {
        eprintln!("{}", ConsoleFormatter::format_issue(issue));
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    // === Dependency Injection ===
    let gateway = Arc::new(RestDialogueGateway::from_config(&config.endpoint)?);
    info!(
        "Dialogue endpoint {} (sender {})",
        gateway.url(),
        gateway.sender()
    );
    let mut controller = ConversationController::new(gateway, config.to_widget_config())
        .with_metadata(Arc::new(StaticMetadata::new(config.metadata_value())));

    if let Some(path) = &config.transcript.path {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                controller = controller
                    .with_conversation_logger(logger.clone())
                    .with_processor(Arc::new(TranscriptProcessor::new(logger)));
            }
            None => warn!("Transcript disabled: {} could not be opened", path),
        }
    }

    let auto_start = config.session.auto_start && !cli.no_start;
    let show_progress = config.repl.show_progress && !cli.quiet;

    // Chat mode
    let Some(message) = cli.message else {
        let repl_config = ReplConfig {
            show_progress,
            history_file: config.repl.history_file.clone(),
            color: config.repl.color,
        };
        ChatRepl::new(controller, repl_config)
            .with_auto_start(auto_start)
            .run()
            .await?;
        return Ok(());
    };

    // Single message mode
    if auto_start {
        controller.start().await?;
    }

    match cli.output {
        OutputFormat::Text => {
            let mut renderer = TranscriptRenderer::new(controller.subscribe(), show_progress);
            renderer
                .follow(controller.ask(&message, AskOptions::default()))
                .await?;
        }
        OutputFormat::Json => {
            let outcome = controller
                .ask(&message, AskOptions::default().hide_response())
                .await?;
            println!("{}", ConsoleFormatter::format_json(&outcome.responses));
        }
    }

    controller.stop();
    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr, or to a daily-rotated file when `[logging] dir` is set.
/// The returned guard must be held until exit so buffered lines are written.
fn init_logging(verbose: u8, config: &FileConfig) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &config.logging.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "parley.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
