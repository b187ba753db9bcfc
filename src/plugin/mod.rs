//! The SEI demo plugin bundle
//!
//! Groups the chat actions and model stubs under one named plugin, the shape
//! a host runtime registers.

use serde::Serialize;

pub mod models;

use crate::action::dispatch::{self, Dispatched};
use crate::action::{Action, Intent};
use models::ModelType;

pub const PLUGIN_NAME: &str = "sei-mate-demo";

/// A named bundle of actions and model stubs
#[derive(Debug, Clone)]
pub struct Plugin {
    pub name: &'static str,
    pub description: &'static str,
    /// Intents in dispatch priority order
    pub intents: Vec<Intent>,
    pub models: Vec<ModelType>,
}

/// Serializable view of a plugin
#[derive(Debug, Serialize)]
pub struct PluginSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub actions: Vec<Action>,
    pub models: Vec<String>,
}

impl Plugin {
    /// The demo plugin with transfer, balance and confirm actions
    pub fn demo() -> Self {
        Self {
            name: PLUGIN_NAME,
            description: "Demo SEI wallet actions: parse transfers, show balances, confirm transfers",
            intents: Intent::ALL.to_vec(),
            models: ModelType::ALL.to_vec(),
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.intents.iter().map(|i| i.action()).collect()
    }

    /// Dispatch a message to this plugin's actions
    pub fn dispatch(&self, text: &str) -> Option<Dispatched> {
        dispatch::dispatch(text, &self.intents)
    }

    /// Call a registered model stub
    pub fn generate(&self, model: ModelType, prompt: &str) -> Option<&'static str> {
        if self.models.contains(&model) {
            Some(models::generate(model, prompt))
        } else {
            None
        }
    }

    pub fn summary(&self) -> PluginSummary {
        PluginSummary {
            name: self.name,
            description: self.description,
            actions: self.actions(),
            models: self.models.iter().map(|m| m.to_string()).collect(),
        }
    }
}
