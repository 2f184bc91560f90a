//! The board: every player and their zones.
//!
//! The board model itself has no player-count limit, but the battle
//! algorithm pairs the active player against a single opponent, so a match
//! always registers exactly two players.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::{Player, PlayerId};
use crate::cards::{Card, CardId};
use crate::zones::FieldSlot;

/// All players, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    players: Vec<Player>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player. Its id must match its registration position.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        assert_eq!(
            player.id().index(),
            self.players.len(),
            "Player id must match registration order"
        );
        let id = player.id();
        self.players.push(player);
        id
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Every card currently in any player's hand.
    pub fn all_hand_cards(&self) -> impl Iterator<Item = &Card> {
        self.players.iter().flat_map(|p| p.hand().iter())
    }

    pub fn all_hand_cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.players.iter_mut().flat_map(|p| p.hand_mut().iter_mut())
    }

    /// Card in a field slot, if any.
    #[must_use]
    pub fn card_at(&self, slot: FieldSlot) -> Option<&Card> {
        self.player(slot.player)?.field().get(slot.index)
    }

    pub fn card_at_mut(&mut self, slot: FieldSlot) -> Option<&mut Card> {
        self.player_mut(slot.player)?.field_mut().get_mut(slot.index)
    }

    /// Remove the card from a field slot, leaving the slot empty.
    pub fn take_card(&mut self, slot: FieldSlot) -> Option<Card> {
        self.player_mut(slot.player)?.field_mut().take(slot.index)
    }

    /// Move the card in `slot` to its owner's grave.
    ///
    /// Returns the id of the buried card, or `None` if the slot was empty.
    pub fn send_to_grave(&mut self, slot: FieldSlot) -> Option<CardId> {
        let card = self.take_card(slot)?;
        let id = card.id();
        let owner = card.owner();
        self[owner].grave_mut().add(card);
        Some(id)
    }

    /// Compact every player's field.
    pub fn compact_fields(&mut self) {
        for player in &mut self.players {
            player.field_mut().compact();
        }
    }

    /// Find the field slot holding a card.
    #[must_use]
    pub fn find_on_field(&self, id: CardId) -> Option<FieldSlot> {
        self.players.iter().find_map(|p| {
            p.field()
                .position_of(id)
                .map(|index| FieldSlot::new(p.id(), index))
        })
    }
}

impl Index<PlayerId> for Board {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for Board {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.players[id.index()]
    }
}
