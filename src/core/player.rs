//! Players and their registration info.
//!
//! ## PlayerId
//!
//! Index into the board's player list, in registration order.
//!
//! ## Player
//!
//! Owns one hand, deck, field and grave, plus hero life. Life is never
//! clamped: a hero attack can push it below zero.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardInfo};
use crate::zones::{Deck, Field, Grave, Hand};

/// Player identifier.
///
/// Player indices are 0-based: the first registered player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player after this one in a game of `player_count` players.
    ///
    /// ```
    /// use rust_duel::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Caller-supplied description of a player, used at registration.
///
/// `deck` is listed top-first: the first entry is drawn first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub life: i32,
    #[serde(default)]
    pub deck: Vec<CardInfo>,
    #[serde(default)]
    pub hand: Vec<CardInfo>,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, life: i32) -> Self {
        Self {
            name: name.into(),
            life,
            deck: Vec::new(),
            hand: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_deck(mut self, deck: impl IntoIterator<Item = CardInfo>) -> Self {
        self.deck = deck.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_hand(mut self, hand: impl IntoIterator<Item = CardInfo>) -> Self {
        self.hand = hand.into_iter().collect();
        self
    }
}

/// A player in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    life: i32,
    hand: Hand,
    deck: Deck,
    field: Field,
    grave: Grave,
}

impl Player {
    /// Build a player from registration info.
    ///
    /// Card ids are taken from `next_card_id`, which is advanced past every
    /// card created. Hand cards are created before deck cards.
    pub fn from_info(id: PlayerId, info: &PlayerInfo, next_card_id: &mut u32) -> Self {
        let mut build = |card: &CardInfo| {
            let card_id = CardId::new(*next_card_id);
            *next_card_id += 1;
            Card::from_info(card_id, id, card)
        };

        let hand = Hand::new(info.hand.iter().map(&mut build));
        let deck = Deck::new(info.deck.iter().map(&mut build));

        Self {
            id,
            name: info.name.clone(),
            life: info.life,
            hand,
            deck,
            field: Field::default(),
            grave: Grave::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hero life.
    #[must_use]
    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn set_life(&mut self, life: i32) {
        self.life = life;
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    #[must_use]
    pub fn grave(&self) -> &Grave {
        &self.grave
    }

    pub fn grave_mut(&mut self) -> &mut Grave {
        &mut self.grave
    }

    /// Deck, hand and field are all empty.
    #[must_use]
    pub fn is_out_of_cards(&self) -> bool {
        self.deck.is_empty() && self.field.is_empty() && self.hand.is_empty()
    }
}
