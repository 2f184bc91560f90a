//! The decision/observer collaborator.

use crate::cards::{Card, CardId};
use crate::core::{Board, Player, Rule, StageInfo};
use crate::rules::{GameResult, Phase};

/// Collaborator the engine reports to and asks for decisions.
///
/// All calls are synchronous. Notifications are observation points only:
/// they receive shared references and cannot change match state. The only
/// decision is `summon_cards`.
///
/// Every notification has a no-op default, so a decision provider only
/// needs to implement `summon_cards`.
pub trait GameUi {
    /// Choose which of the active player's hand cards to summon this turn.
    ///
    /// Every returned id must name a card in the active player's hand.
    fn summon_cards(&mut self, stage: &StageInfo) -> Vec<CardId>;

    fn game_started(&mut self, _board: &Board, _rule: &Rule) {}

    fn player_added(&mut self, _player: &Player) {}

    /// The engine moved from `from` to `to` with `player` active.
    fn phase_changed(&mut self, _player: &Player, _from: Phase, _to: Phase) {}

    fn round_started(&mut self, _player: &Player, _round: u32) {}

    fn round_ended(&mut self, _player: &Player, _round: u32) {}

    /// The active seat passed from `previous` to `next`.
    fn player_changed(&mut self, _previous: &Player, _next: &Player) {}

    fn card_drawn(&mut self, _player: &Player, _card: &Card) {}

    fn cant_draw_hand_full(&mut self, _player: &Player) {}

    fn cant_draw_deck_empty(&mut self, _player: &Player) {}

    fn card_summoned(&mut self, _player: &Player, _card: &Card) {}

    fn battle_begins(&mut self) {}

    /// `attacker` hit `defender`'s hero for `amount`.
    fn hero_attacked(&mut self, _attacker: &Card, _defender: &Player, _amount: i32) {}

    /// `attacker` attacked `defender`; `blocker` is set when the hit was redirected.
    fn card_attacked(
        &mut self,
        _attacker: &Card,
        _defender: &Card,
        _blocker: Option<&Card>,
        _amount: i32,
    ) {
    }

    /// A card's death was confirmed and the dying hook has run.
    fn card_died(&mut self, _card: &Card) {}

    fn game_ended(&mut self, _result: &GameResult) {}
}

impl<U: GameUi + ?Sized> GameUi for &mut U {
    fn summon_cards(&mut self, stage: &StageInfo) -> Vec<CardId> {
        (**self).summon_cards(stage)
    }

    fn game_started(&mut self, board: &Board, rule: &Rule) {
        (**self).game_started(board, rule);
    }

    fn player_added(&mut self, player: &Player) {
        (**self).player_added(player);
    }

    fn phase_changed(&mut self, player: &Player, from: Phase, to: Phase) {
        (**self).phase_changed(player, from, to);
    }

    fn round_started(&mut self, player: &Player, round: u32) {
        (**self).round_started(player, round);
    }

    fn round_ended(&mut self, player: &Player, round: u32) {
        (**self).round_ended(player, round);
    }

    fn player_changed(&mut self, previous: &Player, next: &Player) {
        (**self).player_changed(previous, next);
    }

    fn card_drawn(&mut self, player: &Player, card: &Card) {
        (**self).card_drawn(player, card);
    }

    fn cant_draw_hand_full(&mut self, player: &Player) {
        (**self).cant_draw_hand_full(player);
    }

    fn cant_draw_deck_empty(&mut self, player: &Player) {
        (**self).cant_draw_deck_empty(player);
    }

    fn card_summoned(&mut self, player: &Player, card: &Card) {
        (**self).card_summoned(player, card);
    }

    fn battle_begins(&mut self) {
        (**self).battle_begins();
    }

    fn hero_attacked(&mut self, attacker: &Card, defender: &Player, amount: i32) {
        (**self).hero_attacked(attacker, defender, amount);
    }

    fn card_attacked(
        &mut self,
        attacker: &Card,
        defender: &Card,
        blocker: Option<&Card>,
        amount: i32,
    ) {
        (**self).card_attacked(attacker, defender, blocker, amount);
    }

    fn card_died(&mut self, card: &Card) {
        (**self).card_died(card);
    }

    fn game_ended(&mut self, result: &GameResult) {
        (**self).game_ended(result);
    }
}
