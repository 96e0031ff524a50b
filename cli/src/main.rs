//! CLI entrypoint for model-suite
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod session;

use anyhow::{Result, bail};
use clap::Parser;
use session::{SessionOptions, SuiteSession};
use suite_application::{NoProgress, ProgressNotifier};
use suite_infrastructure::ConfigLoader;
use suite_presentation::{ChatRepl, ChatSession, Cli, ConsoleFormatter, ConsoleProgress};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting model-suite");

    // === Dependency Injection ===
    let mut session = SuiteSession::open(SessionOptions::from_cli(&cli))?;

    // Chat mode
    if cli.chat {
        let history = session.history_path();
        let mut repl = ChatRepl::new(session)
            .with_history_path(history)
            .with_progress(!cli.quiet);

        repl.run().await?;
        return Ok(());
    }

    // Single prompt mode - prompt is required
    let prompt = match cli.prompt_text() {
        Some(p) => p,
        None => bail!("Prompt is required. Use --chat for interactive mode."),
    };

    let console = ConsoleProgress::new();
    let progress: &dyn ProgressNotifier = if cli.quiet {
        &NoProgress
    } else {
        &console
    };

    let outcome = session.submit(&prompt, progress).await?;
    println!(
        "{}",
        ConsoleFormatter::format_summary(&outcome.record, &outcome.saved)
    );

    Ok(())
}
