//! The SEI Mate character descriptor
//!
//! A character is the persona record a host runtime reads when registering the
//! agent: name, prompt text, example dialogue, and which plugins to load.
//! Model provider plugins are selected from an explicit [`ProviderOptions`]
//! value computed by the caller.

use serde::{Deserialize, Serialize};

pub mod loader;

const SQL_PLUGIN: &str = "@elizaos/plugin-sql";
const BOOTSTRAP_PLUGIN: &str = "@elizaos/plugin-bootstrap";
const OPENAI_PLUGIN: &str = "@elizaos/plugin-openai";
const OPENROUTER_PLUGIN: &str = "@elizaos/plugin-openrouter";
const OLLAMA_PLUGIN: &str = "@elizaos/plugin-ollama";

/// Which model provider plugins the character loads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOptions {
    pub enable_openai: bool,
    pub enable_openrouter: bool,
    pub enable_ollama: bool,
}

impl ProviderOptions {
    /// Detect options from variable lookups: a provider is enabled when its
    /// variable is set and non-empty
    pub fn detect<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).map(|v| !v.trim().is_empty()).unwrap_or(false);
        Self {
            enable_openai: present("OPENAI_API_KEY"),
            enable_openrouter: present("OPENROUTER_API_KEY"),
            enable_ollama: present("OLLAMA_API_ENDPOINT"),
        }
    }

    pub fn any(&self) -> bool {
        self.enable_openai || self.enable_openrouter || self.enable_ollama
    }
}

/// Persona descriptor consumed at agent registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,

    #[serde(default)]
    pub username: Option<String>,

    /// System prompt
    #[serde(default)]
    pub system: Option<String>,

    #[serde(default)]
    pub bio: Vec<String>,

    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub style: Style,

    /// Example conversations, each a sequence of turns
    #[serde(default)]
    pub message_examples: Vec<Vec<ExampleMessage>>,

    #[serde(default)]
    pub plugins: Vec<String>,
}

/// Style guidance, split by surface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub all: Vec<String>,
    pub chat: Vec<String>,
    pub post: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleMessage {
    pub name: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ExampleMessage {
    fn new(name: &str, text: &str, action: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            text: text.to_string(),
            action: action.map(str::to_string),
        }
    }
}

impl Character {
    /// Build the prompt prefix from system prompt, bio and style
    pub fn prompt(&self) -> String {
        let mut parts = Vec::new();

        if let Some(ref system) = self.system {
            parts.push(system.clone());
        }

        if !self.bio.is_empty() {
            parts.push(self.bio.join(" "));
        }

        let style: Vec<&str> = self.style.all.iter().chain(&self.style.chat).map(String::as_str).collect();
        if !style.is_empty() {
            parts.push(format!("Style: {}", style.join(" | ")));
        }

        parts.join("\n\n")
    }
}

/// Plugin names the character asks the host to load
pub fn plugin_names(options: &ProviderOptions) -> Vec<String> {
    let mut plugins = vec![SQL_PLUGIN];

    if options.enable_openai {
        plugins.push(OPENAI_PLUGIN);
    }
    if options.enable_openrouter {
        plugins.push(OPENROUTER_PLUGIN);
    }
    if options.enable_ollama {
        plugins.push(OLLAMA_PLUGIN);
    }

    plugins.push(BOOTSTRAP_PLUGIN);
    plugins.into_iter().map(String::from).collect()
}

/// Build the built-in SEI Mate character
pub fn build_character(options: &ProviderOptions) -> Character {
    if !options.any() {
        log::warn!("No model provider enabled; character will load without a provider plugin");
    }

    Character {
        name: "SEI Mate".to_string(),
        username: Some("seimate".to_string()),
        system: Some(
            "You are SEI Mate, a friendly assistant for the SEI blockchain. Help users check their wallet \
             balance and send SEI. Always show the details of a transfer and ask for explicit confirmation \
             before executing it."
                .to_string(),
        ),
        bio: vec![
            "SEI Mate helps people manage their SEI wallet through plain conversation.".to_string(),
            "Knows the SEI network, its tokens, and how transfers work.".to_string(),
            "Careful with money: every transfer is confirmed before it is sent.".to_string(),
        ],
        topics: vec![
            "SEI blockchain".to_string(),
            "wallet balances".to_string(),
            "token transfers".to_string(),
            "transaction confirmation".to_string(),
            "DeFi on SEI".to_string(),
        ],
        style: Style {
            all: vec![
                "Be concise and clear".to_string(),
                "Use emojis to mark the status of an operation".to_string(),
                "Always state amounts with their token symbol".to_string(),
            ],
            chat: vec![
                "Be friendly and helpful".to_string(),
                "Ask for confirmation before any transfer".to_string(),
            ],
            post: vec!["Keep it short".to_string()],
        },
        message_examples: vec![
            vec![
                ExampleMessage::new("{{user}}", "What's my balance?", None),
                ExampleMessage::new("SEI Mate", "Let me check your wallet balance.", Some("SEI_BALANCE")),
            ],
            vec![
                ExampleMessage::new("{{user}}", "Send 5 SEI to sei1abc123", None),
                ExampleMessage::new(
                    "SEI Mate",
                    "I'll prepare that transfer. Please confirm when ready.",
                    Some("SEI_TRANSFER"),
                ),
            ],
            vec![
                ExampleMessage::new("{{user}}", "yes", None),
                ExampleMessage::new("SEI Mate", "Executing your transfer now.", Some("SEI_CONFIRM")),
            ],
        ],
        plugins: plugin_names(options),
    }
}
