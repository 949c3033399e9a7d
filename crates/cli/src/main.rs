//! FAQ Bot CLI
//!
//! Main entry point for the faqbot command-line tool.
//! Answers questions from a trainable FAQ knowledge base using TF-IDF retrieval.

mod commands;
mod worker;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, ListCommand, StatsCommand};
use faqbot_core::{config::AppConfig, logging, AppResult};
use faqbot_knowledge::Chatbot;
use std::path::PathBuf;

/// FAQ Bot - a trainable FAQ chatbot using TF-IDF retrieval
#[derive(Parser, Debug)]
#[command(name = "faqbot")]
#[command(about = "A trainable FAQ chatbot using TF-IDF retrieval", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "FAQBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Minimum similarity for an FAQ answer (0.0-1.0)
    #[arg(long, global = true)]
    threshold: Option<f64>,

    /// YAML file with extra seed Q&A pairs
    #[arg(long, global = true, env = "FAQBOT_SEED_FILE")]
    seed_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive chat session (default)
    Chat(ChatCommand),

    /// Ask a single question
    Ask(AskCommand),

    /// List the knowledge base entries
    List(ListCommand),

    /// Show knowledge base statistics
    Stats(StatsCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load(cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.log_level,
        cli.verbose,
        cli.no_color,
        cli.threshold,
        cli.seed_file,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("FAQ Bot starting");
    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Threshold: {}", config.threshold);

    config.validate()?;

    let bot = Chatbot::from_config(&config)?;

    let command = cli.command.unwrap_or_else(|| Commands::Chat(ChatCommand::default()));

    let command_name = match &command {
        Commands::Chat(_) => "chat",
        Commands::Ask(_) => "ask",
        Commands::List(_) => "list",
        Commands::Stats(_) => "stats",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match command {
        Commands::Chat(cmd) => cmd.execute(bot).await,
        Commands::Ask(cmd) => cmd.execute(bot),
        Commands::List(cmd) => cmd.execute(&bot),
        Commands::Stats(cmd) => cmd.execute(&bot),
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
