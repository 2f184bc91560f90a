//! The battlefield row.
//!
//! A `Field` is an ordered row of slots. Slot index has battle meaning: a
//! card only ever fights the opposing card at the same index. During the
//! battle phase a slot may become empty (its card died or left); `compact`
//! squeezes those holes out once the phase is over.
//!
//! ```
//! use rust_duel::cards::{Card, CardId, CardInfo};
//! use rust_duel::core::PlayerId;
//! use rust_duel::zones::Field;
//!
//! let info = CardInfo::new("Wolf", 2, 2);
//! let mut field = Field::default();
//! for i in 0..3 {
//!     field.add_card(Card::from_info(CardId::new(i), PlayerId::new(0), &info));
//! }
//!
//! field.take(1);
//! assert_eq!(field.slot_count(), 3);
//! field.compact();
//! assert_eq!(field.slot_count(), 2);
//! assert_eq!(field.get(1).map(|c| c.id()), Some(CardId::new(2)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::player::PlayerId;

/// Address of a battlefield slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSlot {
    pub player: PlayerId,
    pub index: usize,
}

impl FieldSlot {
    #[must_use]
    pub const fn new(player: PlayerId, index: usize) -> Self {
        Self { player, index }
    }

    /// The slot facing this one on `opponent`'s field.
    #[must_use]
    pub const fn facing(self, opponent: PlayerId) -> Self {
        Self::new(opponent, self.index)
    }
}

impl std::fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} slot {}", self.player, self.index)
    }
}

/// Positional card slots. SmallVec keeps typical rows inline.
///
/// The row has no capacity limit: `add_card` always finds or makes a slot.
/// Callers that want a board limit enforce it in their summon decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    slots: SmallVec<[Option<Card>; 8]>,
}

impl Field {
    /// Place a card into the first empty slot, or a new slot at the end.
    ///
    /// Returns the slot index used.
    pub fn add_card(&mut self, card: Card) -> usize {
        if let Some(index) = self.slots.iter().position(Option::is_none) {
            self.slots[index] = Some(card);
            index
        } else {
            self.slots.push(Some(card));
            self.slots.len() - 1
        }
    }

    /// Card at `index`, if the slot exists and is occupied.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Remove the card at `index`, leaving the slot empty.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Remove empty slots, keeping the survivors' relative order.
    pub fn compact(&mut self) {
        self.slots.retain(|slot| slot.is_some());
    }

    /// Number of slots, empty ones included.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no slot holds a card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterate occupied slots as `(index, card)`.
    pub fn cards(&self) -> impl Iterator<Item = (usize, &Card)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|card| (i, card)))
    }

    /// Slot index holding the given card.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards().find(|(_, card)| card.id() == id).map(|(i, _)| i)
    }
}
