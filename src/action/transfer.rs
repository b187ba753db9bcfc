//! Transfer request parsing
//!
//! Picks an amount and a destination out of free text and asks the user to
//! confirm. Nothing is submitted; the pending status has no backing state.

use lazy_regex::{regex_captures, regex_find};

use super::{Action, ActionError, ActionResult, ExampleTurn, Response, ResponseContent, round_cents};

/// Demo SEI/USD rate used for the estimate
pub const SEI_USD_RATE: f64 = 0.42;

pub const FORMAT_HINT: &str =
    "❌ Please use the format: transfer <amount> SEI to <address>\nExample: transfer 10 SEI to sei1abc...";

pub fn validate(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("transfer") || lower.contains("send")
}

pub fn handle(text: &str) -> ActionResult {
    let Some((amount_text, recipient)) = parse(text) else {
        log::debug!("Transfer request missing amount or address: {:?}", text);
        return Err(ActionError::invalid_input(FORMAT_HINT));
    };

    let amount: f64 = amount_text
        .parse()
        .map_err(|e| ActionError::internal(format!("Failed to parse amount '{}': {}", amount_text, e)))?;
    if !amount.is_finite() {
        return Err(ActionError::internal(format!("Amount out of range: {}", amount_text)));
    }

    let estimated_usd = round_cents(amount * SEI_USD_RATE);
    if !estimated_usd.is_finite() {
        return Err(ActionError::internal(format!("Estimated value out of range for amount {}", amount_text)));
    }
    log::info!("Transfer pending confirmation: {} SEI to {}", amount_text, recipient);

    let text = format!(
        "🔄 Transfer Request\n\n\
         Amount: {amount} SEI\n\
         To: {recipient}\n\
         Estimated Value: ${usd:.2}\n\n\
         Reply 'yes', 'confirm' or 'proceed' to execute this transfer.",
        amount = amount_text,
        recipient = recipient,
        usd = estimated_usd,
    );

    Ok(Response {
        text,
        content: ResponseContent::TransferPending {
            amount: amount_text.to_string(),
            recipient: recipient.to_string(),
            estimated_usd,
            status: "pending_confirmation",
        },
    })
}

/// Extract (amount, recipient); both must be present
fn parse(text: &str) -> Option<(&str, &str)> {
    let amount = regex_find!(r"\d+(?:\.\d+)?", text)?;
    let (_, recipient) = regex_captures!(r"\bto\s+(\S+)"i, text)?;
    Some((amount, recipient))
}

pub fn action() -> Action {
    Action {
        name: "SEI_TRANSFER",
        similes: vec!["SEND_SEI", "TRANSFER_TOKENS", "SEND_TOKENS", "PAY"],
        description: "Parse a request to send SEI to an address and ask the user to confirm it",
        examples: vec![
            vec![
                ExampleTurn::user("Transfer 10 SEI to sei1qy352eufqy352eufqy352eufqy35qqqz9ayrkz"),
                ExampleTurn::agent(
                    "I'll prepare a transfer of 10 SEI. Please confirm to proceed.",
                    "SEI_TRANSFER",
                ),
            ],
            vec![
                ExampleTurn::user("send 2.5 sei to sei1abcxyz"),
                ExampleTurn::agent("Preparing to send 2.5 SEI. Reply 'yes' to confirm.", "SEI_TRANSFER"),
            ],
        ],
    }
}
