//! Print the provider verification report

use colored::*;
use eyre::{Context, Result};

use crate::cli::OutputFormat;
use crate::verify::{KeySource, ProviderKeys, VerificationReport, run_checks};

pub fn run(keys: &ProviderKeys, format: OutputFormat) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let report = rt.block_on(run_checks(keys));

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => println!("{}", serde_yaml::to_string(&report)?),
        OutputFormat::Text => print_text(&report)?,
    }

    Ok(())
}

fn print_text(report: &VerificationReport) -> Result<()> {
    let rule = super::rule();

    println!("{}", "SEI Mate Provider Verification".bold());
    println!("{}", rule);
    println!("Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    println!("{}", "Environment:".bold());
    for check in &report.providers {
        let source = match check.key_source {
            KeySource::Environment => "set".green(),
            KeySource::Mock => "not set (using mock key)".yellow(),
        };
        println!("  {}: {}", check.env_var, source);
    }
    println!();

    println!("{}", "Providers:".bold());
    for check in &report.providers {
        if check.available {
            println!("  {} {}", "✓".green(), check.name);
        } else {
            println!("  {} {} {}", "✗".red(), check.name, "(mock)".dimmed());
        }
    }
    println!("  Available: {}", report.available.len());
    match report.primary {
        Some(primary) => println!("  Primary: {}", primary.cyan().bold()),
        None => println!("  Primary: {}", "none".dimmed()),
    }
    println!();

    println!("{}", "Endpoints:".bold());
    for check in &report.providers {
        println!("  {} {}: {}", "✓".green(), check.name, check.endpoint);
    }
    println!();

    println!("{}", "Request bodies:".bold());
    for check in &report.providers {
        println!("  {} {}:", "✓".green(), check.name);
        let body = serde_json::to_string_pretty(&check.request_body)?;
        for line in body.lines() {
            println!("      {}", line.dimmed());
        }
    }
    println!();

    println!("{}", "Headers:".bold());
    for check in &report.providers {
        println!("  {} {}:", "✓".green(), check.name);
        for (name, value) in &check.headers {
            println!("      {}: {}", name, value);
        }
    }
    println!();

    println!("{}", "Error scenarios:".bold());
    for scenario in &report.error_scenarios {
        let status = scenario.status.map(|s| format!(" ({})", s)).unwrap_or_default();
        println!("  {} {}{}: {}", "✓".green(), scenario.name, status, scenario.handling.dimmed());
    }
    println!();

    println!("{}", "Plugins:".bold());
    for plugin in &report.plugins {
        println!("  {} {}", "✓".green(), plugin);
    }
    println!();

    if report.mock_mode() {
        println!("{}", "Mock mode".yellow().bold());
        println!("  No provider API keys are configured. Shapes above were checked with mock keys.");
        println!("  To validate against real credentials, set one or more of:");
        println!("    {}", "export OPENAI_API_KEY=sk-...".cyan());
        println!("    {}", "export ANTHROPIC_API_KEY=sk-ant-...".cyan());
        println!("    {}", "export OPENROUTER_API_KEY=sk-or-...".cyan());
        println!();
    }

    println!("{}", rule);
    println!("{} Verification complete", "✓".green());
    Ok(())
}
