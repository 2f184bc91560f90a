//! Match configuration.
//!
//! `Rule` is supplied once when the engine is built and never changes during
//! a match. It derives serde traits so callers can load it from whatever
//! format they store match settings in.

use serde::{Deserialize, Serialize};

/// Match parameters.
///
/// ```
/// use rust_duel::core::Rule;
///
/// let rule = Rule::new().with_max_round(10).with_max_hand_cards(5);
/// assert_eq!(rule.max_round, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The match ends once the round counter exceeds this value.
    pub max_round: u32,

    /// No card is drawn while the hand holds this many cards.
    pub max_hand_cards: usize,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            max_round: 50,
            max_hand_cards: 5,
        }
    }
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_round(mut self, max_round: u32) -> Self {
        self.max_round = max_round;
        self
    }

    #[must_use]
    pub fn with_max_hand_cards(mut self, max_hand_cards: usize) -> Self {
        self.max_hand_cards = max_hand_cards;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule() {
        let rule = Rule::default();
        assert_eq!(rule.max_round, 50);
        assert_eq!(rule.max_hand_cards, 5);
    }

    #[test]
    fn test_rule_from_json() {
        let rule: Rule = serde_json::from_str(r#"{"max_round":10,"max_hand_cards":4}"#).unwrap();
        assert_eq!(rule, Rule::new().with_max_round(10).with_max_hand_cards(4));
    }
}
