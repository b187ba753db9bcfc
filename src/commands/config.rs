use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
        ConfigAction::Get { key } => get(&key, config),
    }
}

fn show_override(value: Option<bool>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "auto".to_string())
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "SEI Mate Configuration".bold());
            println!();

            println!("log_level: {}", config.log_level.as_filter());
            println!(
                "character: {}",
                config
                    .character
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built in)".to_string())
            );
            println!();

            println!("{}:", "providers".cyan());
            println!("  openai: {}", show_override(config.providers.openai));
            println!("  openrouter: {}", show_override(config.providers.openrouter));
            println!("  ollama: {}", show_override(config.providers.ollama));
        }
    }

    Ok(())
}

fn get(key: &str, config: &Config) -> Result<()> {
    let value = match key {
        "log_level" | "log-level" => Some(config.log_level.as_filter().to_string()),
        "character" => Some(
            config
                .character
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        ),
        "providers.openai" => Some(show_override(config.providers.openai)),
        "providers.openrouter" => Some(show_override(config.providers.openrouter)),
        "providers.ollama" => Some(show_override(config.providers.ollama)),
        _ => None,
    };

    match value {
        Some(v) => println!("{}", v),
        None => {
            eprintln!("{} Unknown config key: {}", "✗".red(), key);
            std::process::exit(1);
        }
    }

    Ok(())
}
