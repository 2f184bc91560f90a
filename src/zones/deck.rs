//! Draw pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Ordered draw pile. Index 0 is the top card (the next draw).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// Create a deck from cards listed top-first.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Peek at the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Shuffle the deck in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardInfo};
    use crate::core::player::PlayerId;

    fn deck_of(n: u32) -> Deck {
        let info = CardInfo::new("Soldier", 1, 1);
        Deck::new((0..n).map(|i| Card::from_info(CardId::new(i), PlayerId::new(0), &info)))
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = deck_of(3);

        assert_eq!(deck.top().map(Card::id), Some(CardId::new(0)));
        assert_eq!(deck.draw().map(|c| c.id()), Some(CardId::new(0)));
        assert_eq!(deck.draw().map(|c| c.id()), Some(CardId::new(1)));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_draw_empty() {
        let mut deck = deck_of(1);

        assert!(deck.draw().is_some());
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = deck_of(10);
        let mut rng = GameRng::new(42);

        deck.shuffle(&mut rng);

        let mut ids: Vec<_> = deck.iter().map(Card::id).collect();
        ids.sort();
        assert_eq!(ids, (0..10).map(CardId::new).collect::<Vec<_>>());
    }
}
