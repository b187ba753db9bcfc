//! List the demo plugin's actions

use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::plugin::Plugin;

pub fn run(format: OutputFormat) -> Result<()> {
    let plugin = Plugin::demo();
    let summary = plugin.summary();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&summary)?),
        OutputFormat::Text => {
            println!("{} {}", "Plugin:".bold(), summary.name.green().bold());
            println!("  {}", summary.description.dimmed());
            println!();

            println!("{} {}", "Actions".bold(), "(in dispatch order)".dimmed());
            println!();
            for (i, action) in summary.actions.iter().enumerate() {
                println!("  {}. {}", i + 1, action.name.bold());
                println!("     {}", action.description);
                println!("     Similes: {}", action.similes.join(", ").cyan());
                for example in &action.examples {
                    for turn in example {
                        println!("       {} {}", format!("{}:", turn.name).dimmed(), turn.text);
                    }
                }
                println!();
            }

            println!("{} {}", "Models:".bold(), summary.models.join(", ").magenta());
        }
    }

    Ok(())
}
