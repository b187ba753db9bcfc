//! Demo wallet balance
//!
//! There is no address resolution or ledger query; every request gets the
//! same breakdown.

use super::{Action, ActionResult, ExampleTurn, Response, ResponseContent, TokenBalance};

const BALANCE_TEXT: &str = "💰 Wallet Balance\n\n\
    SEI: 1,250.50 ($525.21)\n\
    USDC: 500.00 ($500.00)\n\
    ATOM: 25.75 ($257.50)\n\n\
    Total Value: $1,282.71";

const TOTAL_USD: f64 = 1282.71;

pub fn validate(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("balance") || lower.contains("wallet")
}

pub fn handle(_text: &str) -> ActionResult {
    log::debug!("Returning demo wallet balance");

    Ok(Response {
        text: BALANCE_TEXT.to_string(),
        content: ResponseContent::Balance {
            balances: demo_balances(),
            total_usd: TOTAL_USD,
        },
    })
}

fn demo_balances() -> Vec<TokenBalance> {
    vec![
        TokenBalance {
            token: "SEI",
            amount: 1250.50,
            usd: 525.21,
        },
        TokenBalance {
            token: "USDC",
            amount: 500.00,
            usd: 500.00,
        },
        TokenBalance {
            token: "ATOM",
            amount: 25.75,
            usd: 257.50,
        },
    ]
}

pub fn action() -> Action {
    Action {
        name: "SEI_BALANCE",
        similes: vec!["CHECK_BALANCE", "WALLET_BALANCE", "SHOW_WALLET", "MY_TOKENS"],
        description: "Show the token balances of the demo wallet",
        examples: vec![vec![
            ExampleTurn::user("What's my wallet balance?"),
            ExampleTurn::agent("Here's your current SEI wallet balance.", "SEI_BALANCE"),
        ]],
    }
}
