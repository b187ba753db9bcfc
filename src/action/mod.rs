//! Chat actions for the SEI wallet demo
//!
//! Each supported intent pairs a predicate (does this message apply?) with a
//! handler (produce a response). Handlers are stateless: every call works only
//! from the current message text.
//!
//! Intents are tried in a fixed priority order, see [`Intent::ALL`].

use serde::Serialize;
use std::fmt;

pub mod balance;
pub mod confirm;
pub mod dispatch;
pub mod transfer;

/// A supported chat intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Intent {
    #[serde(rename = "SEI_TRANSFER")]
    Transfer,
    #[serde(rename = "SEI_BALANCE")]
    Balance,
    #[serde(rename = "SEI_CONFIRM")]
    Confirm,
}

impl Intent {
    /// All intents in dispatch priority order
    pub const ALL: [Intent; 3] = [Intent::Transfer, Intent::Balance, Intent::Confirm];

    /// Whether this intent applies to the message
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Intent::Transfer => transfer::validate(text),
            Intent::Balance => balance::validate(text),
            Intent::Confirm => confirm::validate(text),
        }
    }

    /// Run the handler for this intent
    pub fn handle(&self, text: &str) -> ActionResult {
        match self {
            Intent::Transfer => transfer::handle(text),
            Intent::Balance => balance::handle(text),
            Intent::Confirm => confirm::handle(text),
        }
    }

    /// Static metadata for this intent
    pub fn action(&self) -> Action {
        match self {
            Intent::Transfer => transfer::action(),
            Intent::Balance => balance::action(),
            Intent::Confirm => confirm::action(),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Transfer => "SEI_TRANSFER",
            Intent::Balance => "SEI_BALANCE",
            Intent::Confirm => "SEI_CONFIRM",
        };
        write!(f, "{}", name)
    }
}

/// Descriptive record for an action, as exposed to the host runtime
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    pub name: &'static str,
    pub similes: Vec<&'static str>,
    pub description: &'static str,
    pub examples: Vec<Vec<ExampleTurn>>,
}

/// One turn of an example exchange
#[derive(Debug, Clone, Serialize)]
pub struct ExampleTurn {
    pub name: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
}

impl ExampleTurn {
    pub fn user(text: &'static str) -> Self {
        Self {
            name: "{{user}}",
            text,
            action: None,
        }
    }

    pub fn agent(text: &'static str, action: &'static str) -> Self {
        Self {
            name: "SEI Mate",
            text,
            action: Some(action),
        }
    }
}

/// A successful handler response
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub text: String,
    pub content: ResponseContent,
}

/// Structured payload attached to a response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseContent {
    TransferPending {
        amount: String,
        recipient: String,
        estimated_usd: f64,
        status: &'static str,
    },
    Balance {
        balances: Vec<TokenBalance>,
        total_usd: f64,
    },
    TransferConfirmed {
        success: bool,
        tx_hash: String,
        confirmed_at: chrono::DateTime<chrono::Utc>,
    },
}

/// A single token line in the demo wallet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenBalance {
    pub token: &'static str,
    pub amount: f64,
    pub usd: f64,
}

/// Category of a handler failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The message could not be understood; the user can rephrase
    InvalidInput,
    /// The handler itself failed
    Internal,
}

/// A handler failure, surfaced to the user as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ActionError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
        }
    }

    /// Text shown to the user for this failure
    pub fn reply_text(&self) -> String {
        match self.kind {
            ErrorKind::InvalidInput => self.message.clone(),
            ErrorKind::Internal => format!("⚠️ Error: {}", self.message),
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ActionError {}

pub type ActionResult = Result<Response, ActionError>;

/// Round a dollar figure to cents
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
