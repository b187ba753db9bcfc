//! Chat with the agent

use colored::*;
use eyre::{Context, Result};
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::action::{ActionError, Intent, ResponseContent};
use crate::cli::{ModelSize, OutputFormat};
use crate::plugin::models::ModelType;
use crate::project::Project;

const NO_MODEL_REPLY: &str = "Sorry, I can only help with balances and transfers right now.";

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub message: String,
    pub action: Option<Intent>,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ResponseContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
}

pub fn run(project: &Project, message: &[String], model: ModelSize, format: OutputFormat) -> Result<()> {
    let model = match model {
        ModelSize::Small => ModelType::TextSmall,
        ModelSize::Large => ModelType::TextLarge,
    };

    if !message.is_empty() {
        let reply = respond(project, &message.join(" "), model);
        return print_reply(project, &reply, format, true);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive && format == OutputFormat::Text {
        println!(
            "{} Chatting with {} (type {} to leave)",
            "→".blue(),
            project.character.name.bold(),
            "exit".cyan()
        );
    }

    loop {
        if interactive {
            print!("{} ", ">".green());
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("Failed to read message")? == 0 {
            break;
        }

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = respond(project, text, model);
        print_reply(project, &reply, format, false)?;
    }

    Ok(())
}

/// Produce the agent's reply to one message
pub fn respond(project: &Project, text: &str, model: ModelType) -> ChatReply {
    match project.dispatch(text) {
        Some((_, dispatched)) => {
            let reply = dispatched.reply_text();
            let (content, error) = match dispatched.result {
                Ok(response) => (Some(response.content), None),
                Err(e) => (None, Some(e)),
            };
            ChatReply {
                message: text.to_string(),
                action: Some(dispatched.intent),
                reply,
                content,
                error,
            }
        }
        None => {
            log::debug!("No action matched, using {} stub", model);
            let prompt = format!("{}\n\nUser: {}", project.character.prompt(), text);
            let reply = project.generate(model, &prompt).unwrap_or(NO_MODEL_REPLY);
            ChatReply {
                message: text.to_string(),
                action: None,
                reply: reply.to_string(),
                content: None,
                error: None,
            }
        }
    }
}

fn print_reply(project: &Project, reply: &ChatReply, format: OutputFormat, single: bool) -> Result<()> {
    match format {
        OutputFormat::Json if single => println!("{}", serde_json::to_string_pretty(reply)?),
        OutputFormat::Json => println!("{}", serde_json::to_string(reply)?),
        OutputFormat::Yaml => {
            if !single {
                println!("---");
            }
            print!("{}", serde_yaml::to_string(reply)?);
        }
        OutputFormat::Text => {
            let name = match reply.error {
                Some(_) => project.character.name.yellow().bold(),
                None => project.character.name.green().bold(),
            };
            println!("{}: {}", name, reply.reply);
            if !single {
                println!();
            }
        }
    }
    Ok(())
}
