//! Transfer confirmation
//!
//! Known limitation: confirmation does not look at any earlier transfer
//! request. A bare "yes" succeeds on its own and the hash is fabricated.

use chrono::Utc;

use super::{Action, ActionResult, ExampleTurn, Response, ResponseContent};

const CONFIRM_WORDS: &[&str] = &["yes", "confirm", "proceed"];

pub fn validate(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    CONFIRM_WORDS.contains(&lower.as_str())
}

pub fn handle(_text: &str) -> ActionResult {
    let tx_hash = random_tx_hash();
    log::info!("Transfer confirmed with placeholder hash {}", tx_hash);

    let text = format!(
        "✅ Transfer Successful!\n\n\
         Transaction Hash: {}\n\
         Status: Confirmed\n\n\
         Your SEI has been sent. It may take a few moments to appear in the recipient's wallet.",
        tx_hash
    );

    Ok(Response {
        text,
        content: ResponseContent::TransferConfirmed {
            success: true,
            tx_hash,
            confirmed_at: Utc::now(),
        },
    })
}

/// `0x` followed by 20 random bytes in hex
fn random_tx_hash() -> String {
    let bytes: [u8; 20] = rand::random();
    format!("0x{}", hex::encode(bytes))
}

pub fn action() -> Action {
    Action {
        name: "SEI_CONFIRM",
        similes: vec!["CONFIRM_TRANSFER", "APPROVE", "EXECUTE_TRANSFER"],
        description: "Execute a pending SEI transfer after the user confirms",
        examples: vec![vec![
            ExampleTurn::user("yes"),
            ExampleTurn::agent("Transfer confirmed and submitted.", "SEI_CONFIRM"),
        ]],
    }
}
