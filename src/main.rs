use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod action;
mod character;
mod cli;
mod commands;
mod config;
mod plugin;
mod project;
mod verify;

use character::ProviderOptions;
use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: &LogLevel) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sei-mate")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("sei-mate.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    } else {
        builder.filter_level(log_level.level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        log_level.as_filter(),
        if std::env::var("RUST_LOG").is_ok() { "RUST_LOG env" } else { "config" }
    );
    Ok(())
}

/// Provider options from the environment, with config overrides applied
fn provider_options(config: &Config) -> ProviderOptions {
    let detected = ProviderOptions::detect(|key| std::env::var(key).ok());
    config.providers.apply(detected)
}

/// Provider API keys for the verification report
fn provider_keys() -> verify::ProviderKeys {
    verify::ProviderKeys::from_lookup(|key| std::env::var(key).ok())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Chat { message, model, format } => {
            let project = commands::load_project(config.character.as_deref(), provider_options(&config))?;
            commands::chat::run(&project, &message, model, OutputFormat::resolve(format))
        }
        Commands::Actions { format } => commands::actions::run(OutputFormat::resolve(format)),
        Commands::Character { file, format } => {
            let path = file.or_else(|| config.character.clone());
            let project = commands::load_project(path.as_deref(), provider_options(&config))?;
            commands::character::run(&project, OutputFormat::resolve(format))
        }
        Commands::Verify { format } => commands::verify::run(&provider_keys(), OutputFormat::resolve(format)),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging with log level from config (or RUST_LOG env var)
    setup_logging(&config.log_level).context("Failed to setup logging")?;

    info!("Starting sei-mate with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
