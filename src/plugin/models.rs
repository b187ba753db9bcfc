//! Model output stubs
//!
//! The demo plugin registers fixed strings for the small and large text
//! capabilities instead of calling a model.

use serde::Serialize;
use std::fmt;

/// Model capability tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelType {
    TextSmall,
    TextLarge,
}

impl ModelType {
    pub const ALL: [ModelType; 2] = [ModelType::TextSmall, ModelType::TextLarge];
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelType::TextSmall => write!(f, "TEXT_SMALL"),
            ModelType::TextLarge => write!(f, "TEXT_LARGE"),
        }
    }
}

/// Produce the stub output for a capability; the prompt is ignored
pub fn generate(model: ModelType, prompt: &str) -> &'static str {
    log::debug!("{} stub called with {} byte prompt", model, prompt.len());
    match model {
        ModelType::TextSmall => {
            "I'm SEI Mate, your SEI wallet assistant. I can check your balance, prepare a transfer, or confirm one."
        }
        ModelType::TextLarge => {
            "I'm SEI Mate, a demo assistant for the SEI network. Ask me for your wallet balance, or say something \
             like \"transfer 10 SEI to sei1...\" and I'll prepare the transfer for you to confirm."
        }
    }
}
