//! Project wiring: one character plus the plugins it runs with

use crate::character::Character;
use crate::plugin::Plugin;

/// A runtime-loadable agent: character plus plugin bundle
#[derive(Debug, Clone)]
pub struct Project {
    pub character: Character,
    pub plugins: Vec<Plugin>,
}

impl Project {
    pub fn new(character: Character, plugins: Vec<Plugin>) -> Self {
        Self { character, plugins }
    }

    /// Initialization hook; only logs
    pub fn init(&self) {
        log::info!("Initializing character: {}", self.character.name);
        log::info!("Character plugins: {}", self.character.plugins.join(", "));
        for plugin in &self.plugins {
            log::info!("Registered plugin {} with {} actions", plugin.name, plugin.intents.len());
        }
    }

    /// Dispatch a message through each plugin in registration order
    pub fn dispatch(&self, text: &str) -> Option<(&Plugin, crate::action::dispatch::Dispatched)> {
        self.plugins.iter().find_map(|p| p.dispatch(text).map(|d| (p, d)))
    }

    /// First plugin providing a model stub for this capability
    pub fn generate(&self, model: crate::plugin::models::ModelType, prompt: &str) -> Option<&'static str> {
        self.plugins.iter().find_map(|p| p.generate(model, prompt))
    }
}
