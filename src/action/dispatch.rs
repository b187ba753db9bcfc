//! Message dispatching

use super::{ActionResult, Intent};

/// Outcome of dispatching one message
#[derive(Debug, Clone)]
pub struct Dispatched {
    pub intent: Intent,
    pub result: ActionResult,
}

impl Dispatched {
    /// Text delivered back to the chat surface
    pub fn reply_text(&self) -> String {
        match &self.result {
            Ok(response) => response.text.clone(),
            Err(e) => e.reply_text(),
        }
    }
}

/// Hand a message to the first intent whose predicate accepts it
///
/// Intents are tried in the order given; `None` means nothing matched.
pub fn dispatch(text: &str, intents: &[Intent]) -> Option<Dispatched> {
    let intent = intents.iter().copied().find(|intent| intent.matches(text))?;
    log::debug!("Message matched {}", intent);

    let result = intent.handle(text);
    if let Err(e) = &result {
        match e.kind {
            super::ErrorKind::InvalidInput => log::info!("{} rejected input: {}", intent, e),
            super::ErrorKind::Internal => log::error!("{} failed: {}", intent, e),
        }
    }

    Some(Dispatched { intent, result })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ErrorKind, ResponseContent};

    #[test]
    fn test_no_match_returns_none() {
        assert!(dispatch("hello there", &Intent::ALL).is_none());
    }

    #[test]
    fn test_transfer_wins_over_balance() {
        let dispatched = dispatch("send 5 SEI from my wallet to sei1abc", &Intent::ALL).unwrap();
        assert_eq!(dispatched.intent, Intent::Transfer);
        assert!(dispatched.result.is_ok());
    }

    #[test]
    fn test_balance_dispatch() {
        let dispatched = dispatch("Show my BALANCE", &Intent::ALL).unwrap();
        assert_eq!(dispatched.intent, Intent::Balance);
        assert!(matches!(
            dispatched.result.unwrap().content,
            ResponseContent::Balance { .. }
        ));
    }

    #[test]
    fn test_confirm_dispatch() {
        let dispatched = dispatch("Proceed", &Intent::ALL).unwrap();
        assert_eq!(dispatched.intent, Intent::Confirm);
        assert!(dispatched.reply_text().contains("Transfer Successful"));
    }

    #[test]
    fn test_invalid_transfer_reply_is_format_hint() {
        let dispatched = dispatch("transfer please", &Intent::ALL).unwrap();
        assert_eq!(dispatched.intent, Intent::Transfer);
        assert_eq!(dispatched.reply_text(), crate::action::transfer::FORMAT_HINT);
        assert_eq!(dispatched.result.unwrap_err().kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_order_is_respected() {
        let dispatched = dispatch("send my wallet balance", &[Intent::Balance, Intent::Transfer]).unwrap();
        assert_eq!(dispatched.intent, Intent::Balance);
    }
}
