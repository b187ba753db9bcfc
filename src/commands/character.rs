//! Show the character descriptor

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::project::Project;

pub fn run(project: &Project, format: OutputFormat) -> Result<()> {
    let character = &project.character;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(character)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(character)?),
        OutputFormat::Text => {
            print!("{} {}", "Character:".bold(), character.name.green().bold());
            match character.username {
                Some(ref username) => println!(" {}", format!("(@{})", username).dimmed()),
                None => println!(),
            }

            if let Some(ref system) = character.system {
                println!();
                println!("{}", "System:".bold());
                println!("  {}", system);
            }

            if !character.bio.is_empty() {
                println!();
                println!("{}", "Bio:".bold());
                for line in &character.bio {
                    println!("  {} {}", "•".cyan(), line);
                }
            }

            if !character.topics.is_empty() {
                println!();
                println!("{} {}", "Topics:".bold(), character.topics.join(", "));
            }

            let style = &character.style;
            if !(style.all.is_empty() && style.chat.is_empty() && style.post.is_empty()) {
                println!();
                println!("{}", "Style:".bold());
                for (surface, lines) in [("all", &style.all), ("chat", &style.chat), ("post", &style.post)] {
                    for line in lines {
                        println!("  {} {}", format!("[{}]", surface).dimmed(), line.italic());
                    }
                }
            }

            println!();
            println!("{}", "Plugins:".bold());
            if character.plugins.is_empty() {
                println!("  {}", "(none)".dimmed());
            }
            for name in &character.plugins {
                println!("  {} {}", "●".green(), name);
            }
            for plugin in &project.plugins {
                println!("  {} {} {}", "●".green(), plugin.name, "(built in)".dimmed());
            }
        }
    }

    Ok(())
}
