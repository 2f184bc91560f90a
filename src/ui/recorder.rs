//! Structured match log.
//!
//! `EventRecorder` wraps any `GameUi`, forwards every call to it, and keeps
//! a `GameEvent` for each notification. Events carry ids and numbers only,
//! so a log is cheap to keep and serializes cleanly.
//!
//! ```
//! use rust_duel::core::{PlayerInfo, Rule};
//! use rust_duel::rules::GameEngine;
//! use rust_duel::ui::{EventRecorder, GameEvent, NeverSummon};
//!
//! let rule = Rule::new().with_max_round(2);
//! let mut engine = GameEngine::new(EventRecorder::new(NeverSummon), rule);
//! engine.register_players(PlayerInfo::new("A", 20), PlayerInfo::new("B", 20)).unwrap();
//! engine.play_game().unwrap();
//!
//! let events = engine.ui().events();
//! assert!(matches!(events.first(), Some(GameEvent::PlayerAdded { .. })));
//! assert!(matches!(events.last(), Some(GameEvent::GameEnded { .. })));
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::{Board, Player, PlayerId, Rule, StageInfo};
use crate::rules::{GameEndCause, GameResult, Phase};

use super::GameUi;

/// One recorded notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { players: usize, rule: Rule },
    PlayerAdded { player: PlayerId },
    PhaseChanged { player: PlayerId, from: Phase, to: Phase },
    RoundStarted { player: PlayerId, round: u32 },
    RoundEnded { player: PlayerId, round: u32 },
    PlayerChanged { previous: PlayerId, next: PlayerId },
    CardDrawn { player: PlayerId, card: CardId },
    HandFull { player: PlayerId },
    DeckEmpty { player: PlayerId },
    SummonRequested { player: PlayerId, cards: Vec<CardId> },
    CardSummoned { player: PlayerId, card: CardId },
    BattleBegins,
    HeroAttacked { attacker: CardId, defender: PlayerId, amount: i32, life_after: i32 },
    CardAttacked { attacker: CardId, defender: CardId, blocker: Option<CardId>, amount: i32 },
    CardDied { card: CardId, owner: PlayerId },
    GameEnded { winner: PlayerId, rounds: u32, cause: GameEndCause },
}

/// Recording decorator around a `GameUi`.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder<U> {
    inner: U,
    events: Vec<GameEvent>,
}

impl<U: GameUi> EventRecorder<U> {
    pub fn new(inner: U) -> Self {
        Self {
            inner,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn inner(&self) -> &U {
        &self.inner
    }

    /// Drop the wrapper, keeping the log.
    #[must_use]
    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }

    /// Count events matching a predicate.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }
}

impl<U: GameUi> GameUi for EventRecorder<U> {
    fn summon_cards(&mut self, stage: &StageInfo) -> Vec<CardId> {
        let cards = self.inner.summon_cards(stage);
        self.events.push(GameEvent::SummonRequested {
            player: stage.active_player_id(),
            cards: cards.clone(),
        });
        cards
    }

    fn game_started(&mut self, board: &Board, rule: &Rule) {
        self.events.push(GameEvent::GameStarted {
            players: board.player_count(),
            rule: rule.clone(),
        });
        self.inner.game_started(board, rule);
    }

    fn player_added(&mut self, player: &Player) {
        self.events.push(GameEvent::PlayerAdded { player: player.id() });
        self.inner.player_added(player);
    }

    fn phase_changed(&mut self, player: &Player, from: Phase, to: Phase) {
        self.events.push(GameEvent::PhaseChanged { player: player.id(), from, to });
        self.inner.phase_changed(player, from, to);
    }

    fn round_started(&mut self, player: &Player, round: u32) {
        self.events.push(GameEvent::RoundStarted { player: player.id(), round });
        self.inner.round_started(player, round);
    }

    fn round_ended(&mut self, player: &Player, round: u32) {
        self.events.push(GameEvent::RoundEnded { player: player.id(), round });
        self.inner.round_ended(player, round);
    }

    fn player_changed(&mut self, previous: &Player, next: &Player) {
        self.events.push(GameEvent::PlayerChanged {
            previous: previous.id(),
            next: next.id(),
        });
        self.inner.player_changed(previous, next);
    }

    fn card_drawn(&mut self, player: &Player, card: &Card) {
        self.events.push(GameEvent::CardDrawn { player: player.id(), card: card.id() });
        self.inner.card_drawn(player, card);
    }

    fn cant_draw_hand_full(&mut self, player: &Player) {
        self.events.push(GameEvent::HandFull { player: player.id() });
        self.inner.cant_draw_hand_full(player);
    }

    fn cant_draw_deck_empty(&mut self, player: &Player) {
        self.events.push(GameEvent::DeckEmpty { player: player.id() });
        self.inner.cant_draw_deck_empty(player);
    }

    fn card_summoned(&mut self, player: &Player, card: &Card) {
        self.events.push(GameEvent::CardSummoned { player: player.id(), card: card.id() });
        self.inner.card_summoned(player, card);
    }

    fn battle_begins(&mut self) {
        self.events.push(GameEvent::BattleBegins);
        self.inner.battle_begins();
    }

    fn hero_attacked(&mut self, attacker: &Card, defender: &Player, amount: i32) {
        self.events.push(GameEvent::HeroAttacked {
            attacker: attacker.id(),
            defender: defender.id(),
            amount,
            life_after: defender.life(),
        });
        self.inner.hero_attacked(attacker, defender, amount);
    }

    fn card_attacked(
        &mut self,
        attacker: &Card,
        defender: &Card,
        blocker: Option<&Card>,
        amount: i32,
    ) {
        self.events.push(GameEvent::CardAttacked {
            attacker: attacker.id(),
            defender: defender.id(),
            blocker: blocker.map(Card::id),
            amount,
        });
        self.inner.card_attacked(attacker, defender, blocker, amount);
    }

    fn card_died(&mut self, card: &Card) {
        self.events.push(GameEvent::CardDied { card: card.id(), owner: card.owner() });
        self.inner.card_died(card);
    }

    fn game_ended(&mut self, result: &GameResult) {
        self.events.push(GameEvent::GameEnded {
            winner: result.winner,
            rounds: result.rounds,
            cause: result.cause,
        });
        self.inner.game_ended(result);
    }
}
