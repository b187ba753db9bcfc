pub mod actions;
pub mod character;
pub mod chat;
pub mod completions;
pub mod config;
pub mod verify;

use eyre::Result;
use std::path::Path;
use terminal_size::{Width, terminal_size};

use crate::character::{ProviderOptions, build_character, loader::load_character};
use crate::config::Config;
use crate::plugin::Plugin;
use crate::project::Project;

/// Build and initialize the project, optionally with a character from file
pub fn load_project(character_file: Option<&Path>, options: ProviderOptions) -> Result<Project> {
    let character = match character_file {
        Some(path) => load_character(&Config::expand_path(path))?,
        None => build_character(&options),
    };

    let project = Project::new(character, vec![Plugin::demo()]);
    project.init();
    Ok(project)
}

/// Horizontal rule sized to the terminal, capped at 60 columns
pub fn rule() -> String {
    let width = terminal_size().map(|(Width(w), _)| w as usize).unwrap_or(60);
    "═".repeat(width.min(60))
}
