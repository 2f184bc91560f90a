//! Phase state machine driver.
//!
//! `GameEngine` runs one match from registration to a `GameResult`:
//!
//! ```text
//! Start -> Draw -> Standby -> Summon -> Battle -> End -> Start ...
//! ```
//!
//! Each phase handler reads and mutates the `StageInfo`, reports to the
//! `GameUi` collaborator, and either completes or returns a `GameOver`.
//! The driver loop is the only place a `GameOver` is consumed.
//!
//! ## Battle
//!
//! The active player's field is walked left to right. Each card attacks
//! the opposing card in the same slot, or the opposing hero when that slot
//! is empty. The `Resolver` is consulted before the attack, for blocking,
//! for damage, on death, and after the attack. Both fields are compacted
//! once the walk is over.
//!
//! ## Example
//!
//! ```
//! use rust_duel::cards::CardInfo;
//! use rust_duel::core::{PlayerId, PlayerInfo, Rule};
//! use rust_duel::rules::GameEngine;
//! use rust_duel::ui::SummonReady;
//!
//! let deck: Vec<_> = (0..5).map(|_| CardInfo::new("Soldier", 2, 2)).collect();
//! let mut engine = GameEngine::new(SummonReady, Rule::new().with_max_round(30));
//! engine
//!     .register_players(
//!         PlayerInfo::new("Alice", 10).with_deck(deck.clone()),
//!         PlayerInfo::new("Bob", 10).with_deck(deck),
//!     )
//!     .unwrap();
//!
//! let result = engine.play_game().unwrap();
//! assert!(result.rounds <= 31);
//! assert!(result.is_winner(PlayerId::new(0)) || result.is_winner(PlayerId::new(1)));
//! ```

use crate::cards::Card;
use crate::core::{Board, GameRng, Player, PlayerId, PlayerInfo, Rule, StageInfo};
use crate::effects::{DefaultResolver, Resolver};
use crate::ui::GameUi;
use crate::zones::FieldSlot;

use super::error::EngineError;
use super::phase::Phase;
use super::result::{GameOver, GameResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchStatus {
    AwaitingPlayers,
    Ready,
    Finished,
}

/// Drives one two-player match.
pub struct GameEngine<U: GameUi, R: Resolver = DefaultResolver> {
    stage: StageInfo,
    ui: U,
    resolver: R,
    status: MatchStatus,
    next_card_id: u32,
    shuffle_rng: Option<GameRng>,
}

impl<U: GameUi> GameEngine<U, DefaultResolver> {
    /// Create an engine with the baseline resolver.
    pub fn new(ui: U, rule: Rule) -> Self {
        Self::with_resolver(ui, rule, DefaultResolver)
    }
}

impl<U: GameUi, R: Resolver> GameEngine<U, R> {
    /// Create an engine with a custom resolver.
    pub fn with_resolver(ui: U, rule: Rule, resolver: R) -> Self {
        Self {
            stage: StageInfo::new(Board::new(), rule),
            ui,
            resolver,
            status: MatchStatus::AwaitingPlayers,
            next_card_id: 0,
            shuffle_rng: None,
        }
    }

    /// Shuffle each player's deck at registration.
    #[must_use]
    pub fn shuffle_decks(mut self, seed: u64) -> Self {
        self.shuffle_rng = Some(GameRng::new(seed));
        self
    }

    /// Register both players. Must be called exactly once, before `play_game`.
    ///
    /// Players get ids 0 and 1 in argument order, and the collaborator is
    /// told about each one as it is added.
    pub fn register_players(
        &mut self,
        first: PlayerInfo,
        second: PlayerInfo,
    ) -> Result<(), EngineError> {
        if self.status != MatchStatus::AwaitingPlayers {
            return Err(EngineError::PlayersAlreadyRegistered);
        }

        for (index, info) in [first, second].iter().enumerate() {
            let player_id = PlayerId::new(index as u8);
            let mut player = Player::from_info(player_id, info, &mut self.next_card_id);
            if let Some(rng) = self.shuffle_rng.as_mut() {
                player.deck_mut().shuffle(rng);
            }
            let id = self.stage.board_mut().add_player(player);
            self.ui.player_added(&self.stage.board()[id]);
        }

        self.status = MatchStatus::Ready;
        Ok(())
    }

    /// Run the match to completion.
    pub fn play_game(&mut self) -> Result<GameResult, EngineError> {
        match self.status {
            MatchStatus::AwaitingPlayers => return Err(EngineError::PlayersNotRegistered),
            MatchStatus::Finished => return Err(EngineError::MatchAlreadyPlayed),
            MatchStatus::Ready => {}
        }

        self.ui.game_started(self.stage.board(), self.stage.rule());
        self.stage.set_active_player_id(PlayerId::new(0));
        self.stage.set_round(0);

        let signal = self.proceed_game();
        let result = self.build_result(signal);
        self.status = MatchStatus::Finished;

        self.ui.game_ended(&result);
        Ok(result)
    }

    #[must_use]
    pub fn stage(&self) -> &StageInfo {
        &self.stage
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    #[must_use]
    pub fn into_ui(self) -> U {
        self.ui
    }

    fn proceed_game(&mut self) -> GameOver {
        let mut phase = Phase::Start;
        loop {
            if let Err(signal) = self.run_phase(phase) {
                return signal;
            }
            let next = phase.next();
            self.ui.phase_changed(self.stage.active_player(), phase, next);
            phase = next;
        }
    }

    fn run_phase(&mut self, phase: Phase) -> Result<(), GameOver> {
        match phase {
            Phase::Start => self.round_start(),
            Phase::Draw => {
                self.draw_card();
                Ok(())
            }
            Phase::Standby => Ok(()),
            Phase::Summon => {
                self.summon_cards();
                Ok(())
            }
            Phase::Battle => self.battle(),
            Phase::End => {
                self.round_end();
                Ok(())
            }
        }
    }

    fn build_result(&self, signal: GameOver) -> GameResult {
        let winner = match signal.losing_player() {
            Some(loser) => self.stage.opponent_of(loser),
            None => PlayerId::new(0),
        };

        GameResult {
            board: self.stage.board().clone(),
            winner,
            rounds: self.stage.round(),
            cause: signal.cause(),
        }
    }

    fn round_start(&mut self) -> Result<(), GameOver> {
        // Round limit is checked before exhaustion.
        if self.stage.round() > self.stage.rule().max_round {
            return Err(GameOver::RoundLimitExceeded);
        }

        let active = self.stage.active_player();
        if active.is_out_of_cards() {
            return Err(GameOver::AllCardsExhausted { player: active.id() });
        }

        self.ui.round_started(active, self.stage.round());
        Ok(())
    }

    fn draw_card(&mut self) {
        let max_hand = self.stage.rule().max_hand_cards;
        let player_id = self.stage.active_player_id();
        let player = &mut self.stage.board_mut()[player_id];

        if player.hand().len() >= max_hand {
            self.ui.cant_draw_hand_full(player);
            return;
        }

        let Some(mut card) = player.deck_mut().draw() else {
            self.ui.cant_draw_deck_empty(player);
            return;
        };

        card.reset_summon_delay();
        let id = card.id();
        player.hand_mut().add(card);

        let player = &*player;
        if let Some(card) = player.hand().get(id) {
            self.ui.card_drawn(player, card);
        }
    }

    fn summon_cards(&mut self) {
        let selection = self.ui.summon_cards(&self.stage);
        let player_id = self.stage.active_player_id();
        let player = &mut self.stage.board_mut()[player_id];

        for id in selection {
            let Some(mut card) = player.hand_mut().remove(id) else {
                panic!("summon selection named {} which is not in {}'s hand", id, player_id);
            };
            card.reset();
            let index = player.field_mut().add_card(card);

            let summoner = &*player;
            if let Some(card) = summoner.field().get(index) {
                self.ui.card_summoned(summoner, card);
            }
        }
    }

    fn battle(&mut self) -> Result<(), GameOver> {
        self.ui.battle_begins();

        let attacker_id = self.stage.active_player_id();
        let defender_id = self.stage.inactive_player_id();

        let mut index = 0;
        while index < self.stage.board()[attacker_id].field().slot_count() {
            let slot = FieldSlot::new(attacker_id, index);
            index += 1;

            if self.stage.board().card_at(slot).is_none() {
                continue;
            }

            self.resolver.pre_attack(self.stage.board_mut(), slot, defender_id);
            if self.stage.board().card_at(slot).is_none() {
                continue;
            }

            let opposing = slot.facing(defender_id);
            if self.stage.board().card_at(opposing).is_none() {
                self.attack_hero(slot, defender_id)?;
            } else {
                self.attack_card(slot, opposing);
            }

            if self.stage.board().card_at(slot).is_none() {
                continue;
            }
            self.resolver.post_attack(self.stage.board_mut(), slot, defender_id);
        }

        self.stage.board_mut().compact_fields();
        Ok(())
    }

    fn attack_hero(&mut self, attacker: FieldSlot, defender: PlayerId) -> Result<(), GameOver> {
        let board = self.stage.board_mut();
        let Some(amount) = board.card_at(attacker).map(Card::attack) else {
            return Ok(());
        };

        let life = board[defender].life().saturating_sub(amount);
        board[defender].set_life(life);

        // Notify even when the hero is now dead.
        let board = &*board;
        if let Some(card) = board.card_at(attacker) {
            self.ui.hero_attacked(card, &board[defender], amount);
        }

        if life <= 0 {
            return Err(GameOver::HeroDied { player: defender });
        }
        Ok(())
    }

    fn attack_card(&mut self, attacker: FieldSlot, defender: FieldSlot) {
        let board = self.stage.board_mut();

        let status = self.resolver.attack_blocking(board, attacker, defender);
        if status.blocked {
            return;
        }

        let target = status
            .redirect
            .filter(|slot| board.card_at(*slot).is_some())
            .unwrap_or(defender);

        let amount = {
            let board = &*board;
            let (Some(attacking), Some(defending)) =
                (board.card_at(attacker), board.card_at(defender))
            else {
                return;
            };
            let blocker = if target == defender { None } else { board.card_at(target) };
            let amount = attacking.attack();
            self.ui.card_attacked(attacking, defending, blocker, amount);
            amount
        };

        let outcome = self.resolver.apply_damage(board, target, amount);
        if outcome.card_dead {
            let victim = board.card_at(target).cloned();
            self.resolver.dying(board, attacker, target);
            if let Some(victim) = victim {
                self.ui.card_died(&victim);
            }
        }
    }

    fn round_end(&mut self) {
        for card in self.stage.board_mut().all_hand_cards_mut() {
            card.tick_summon_delay();
        }

        let previous = self.stage.active_player_id();
        self.ui.round_ended(&self.stage.board()[previous], self.stage.round());

        self.stage.set_round(self.stage.round() + 1);
        let next = previous.next(self.stage.board().player_count());
        self.stage.set_active_player_id(next);

        let board = self.stage.board();
        self.ui.player_changed(&board[previous], &board[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardInfo};
    use crate::rules::GameEndCause;
    use crate::ui::{EventRecorder, GameEvent, NeverSummon};

    type TestEngine = GameEngine<EventRecorder<NeverSummon>>;

    fn engine_with(rule: Rule, first: PlayerInfo, second: PlayerInfo) -> TestEngine {
        let mut engine = GameEngine::new(EventRecorder::new(NeverSummon), rule);
        engine.register_players(first, second).unwrap();
        engine
    }

    fn engine() -> TestEngine {
        let deck = (0..3).map(|i| CardInfo::new(format!("C{}", i), 1, 1).with_summon_delay(2));
        let deck: Vec<_> = deck.collect();
        engine_with(
            Rule::new().with_max_round(10).with_max_hand_cards(2),
            PlayerInfo::new("A", 20).with_deck(deck.clone()),
            PlayerInfo::new("B", 20).with_deck(deck),
        )
    }

    fn place(
        engine: &mut TestEngine,
        player: PlayerId,
        id: u32,
        attack: i32,
        health: i32,
    ) -> FieldSlot {
        let card = Card::from_info(CardId::new(id), player, &CardInfo::new("F", attack, health));
        let index = engine.stage.board_mut()[player].field_mut().add_card(card);
        FieldSlot::new(player, index)
    }

    fn events(engine: &TestEngine) -> &[GameEvent] {
        engine.ui().events()
    }

    #[test]
    fn test_register_twice_fails() {
        let mut engine = engine();
        let err = engine
            .register_players(PlayerInfo::new("C", 1), PlayerInfo::new("D", 1))
            .unwrap_err();
        assert_eq!(err, EngineError::PlayersAlreadyRegistered);
    }

    #[test]
    fn test_play_before_register_fails() {
        let mut engine = GameEngine::new(NeverSummon, Rule::default());
        assert_eq!(engine.play_game().unwrap_err(), EngineError::PlayersNotRegistered);
    }

    #[test]
    fn test_play_twice_fails() {
        let mut engine = engine();
        engine.play_game().unwrap();
        assert_eq!(engine.play_game().unwrap_err(), EngineError::MatchAlreadyPlayed);
    }

    #[test]
    fn test_registration_notifies_in_order() {
        let engine = engine();

        assert_eq!(
            events(&engine),
            &[
                GameEvent::PlayerAdded { player: PlayerId::new(0) },
                GameEvent::PlayerAdded { player: PlayerId::new(1) },
            ]
        );
        assert_eq!(engine.stage().board().player_count(), 2);
    }

    #[test]
    fn test_round_limit_checked_before_exhaustion() {
        let mut engine = engine_with(
            Rule::new().with_max_round(3),
            PlayerInfo::new("A", 20),
            PlayerInfo::new("B", 20),
        );
        engine.stage.set_round(4);

        assert_eq!(engine.round_start(), Err(GameOver::RoundLimitExceeded));
    }

    #[test]
    fn test_round_start_exhaustion() {
        let mut engine = engine_with(
            Rule::default(),
            PlayerInfo::new("A", 20),
            PlayerInfo::new("B", 20),
        );

        assert_eq!(
            engine.round_start(),
            Err(GameOver::AllCardsExhausted { player: PlayerId::new(0) })
        );
    }

    #[test]
    fn test_round_start_at_limit_continues() {
        let mut engine = engine();
        engine.stage.set_round(10);

        assert_eq!(engine.round_start(), Ok(()));
        assert_eq!(
            events(&engine).last(),
            Some(&GameEvent::RoundStarted { player: PlayerId::new(0), round: 10 })
        );
    }

    #[test]
    fn test_draw_takes_top_and_resets_delay() {
        let mut engine = engine();
        let p0 = PlayerId::new(0);
        engine.stage.board_mut()[p0].deck_mut().draw();
        let top = engine.stage.board()[p0].deck().top().map(Card::id).unwrap();

        engine.draw_card();

        let player = &engine.stage.board()[p0];
        assert_eq!(player.hand().len(), 1);
        assert_eq!(player.deck().len(), 1);
        assert_eq!(player.hand().get(top).map(Card::summon_delay), Some(2));
        assert_eq!(events(&engine).last(), Some(&GameEvent::CardDrawn { player: p0, card: top }));
    }

    #[test]
    fn test_draw_blocked_by_full_hand() {
        let mut engine = engine();
        engine.draw_card();
        engine.draw_card();

        engine.draw_card();

        let player = &engine.stage.board()[PlayerId::new(0)];
        assert_eq!(player.hand().len(), 2);
        assert_eq!(player.deck().len(), 1);
        assert_eq!(events(&engine).last(), Some(&GameEvent::HandFull { player: PlayerId::new(0) }));
    }

    #[test]
    fn test_draw_blocked_by_empty_deck() {
        let mut engine = engine_with(
            Rule::default(),
            PlayerInfo::new("A", 20).with_hand([CardInfo::new("H", 1, 1)]),
            PlayerInfo::new("B", 20),
        );

        engine.draw_card();

        assert_eq!(engine.stage.board()[PlayerId::new(0)].hand().len(), 1);
        assert_eq!(
            events(&engine).last(),
            Some(&GameEvent::DeckEmpty { player: PlayerId::new(0) })
        );
    }

    #[test]
    fn test_hero_attack_for_each_open_slot() {
        let mut engine = engine();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        place(&mut engine, p0, 100, 2, 5);
        place(&mut engine, p0, 101, 3, 5);
        place(&mut engine, p1, 200, 0, 50);

        engine.battle().unwrap();

        // Slot 0 is blocked by card 200, slot 1 is open.
        assert_eq!(engine.stage.board()[p1].life(), 17);
        let hero_hits: Vec<_> = events(&engine)
            .iter()
            .filter_map(|e| match e {
                GameEvent::HeroAttacked { attacker, amount, .. } => Some((*attacker, *amount)),
                _ => None,
            })
            .collect();
        assert_eq!(hero_hits, vec![(CardId::new(101), 3)]);
    }

    #[test]
    fn test_battle_kills_and_compacts() {
        let mut engine = engine();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        place(&mut engine, p0, 100, 5, 5);
        place(&mut engine, p1, 200, 0, 3);
        place(&mut engine, p1, 201, 0, 3);
        place(&mut engine, p1, 202, 0, 3);

        engine.battle().unwrap();

        let field = engine.stage.board()[p1].field();
        let survivors: Vec<_> = field.cards().map(|(_, c)| c.id()).collect();
        assert_eq!(survivors, vec![CardId::new(201), CardId::new(202)]);
        assert_eq!(field.slot_count(), 2);
        assert!(engine.stage.board()[p1].grave().contains(CardId::new(200)));
        assert_eq!(
            events(&engine).last(),
            Some(&GameEvent::CardDied { card: CardId::new(200), owner: p1 })
        );
    }

    #[test]
    fn test_hero_death_ends_battle_immediately() {
        let mut engine = engine_with(
            Rule::default(),
            PlayerInfo::new("A", 20),
            PlayerInfo::new("B", 4),
        );
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        place(&mut engine, p0, 100, 5, 1);
        place(&mut engine, p0, 101, 5, 1);

        assert_eq!(engine.battle(), Err(GameOver::HeroDied { player: p1 }));
        assert_eq!(engine.stage.board()[p1].life(), -1);
        assert_eq!(engine.ui().count(|e| matches!(e, GameEvent::HeroAttacked { .. })), 1);
    }

    #[test]
    fn test_hero_life_saturates() {
        let mut engine = engine_with(
            Rule::default(),
            PlayerInfo::new("A", 20),
            PlayerInfo::new("B", i32::MAX),
        );
        let p1 = PlayerId::new(1);
        place(&mut engine, PlayerId::new(0), 100, -5, 1);

        assert_eq!(engine.battle(), Ok(()));
        assert_eq!(engine.stage.board()[p1].life(), i32::MAX);
    }

    #[test]
    fn test_summon_moves_cards_to_field() {
        struct SummonAll;
        impl GameUi for SummonAll {
            fn summon_cards(&mut self, stage: &StageInfo) -> Vec<CardId> {
                stage.active_player().hand().iter().map(Card::id).collect()
            }
        }

        let mut engine = GameEngine::new(SummonAll, Rule::default());
        engine
            .register_players(
                PlayerInfo::new("A", 20).with_hand([
                    CardInfo::new("X", 1, 1).with_summon_delay(3),
                    CardInfo::new("Y", 2, 2),
                ]),
                PlayerInfo::new("B", 20),
            )
            .unwrap();
        engine.stage.board_mut()[PlayerId::new(0)]
            .hand_mut()
            .iter_mut()
            .for_each(|c| c.set_summon_delay(0));

        engine.summon_cards();

        let player = &engine.stage.board()[PlayerId::new(0)];
        assert!(player.hand().is_empty());
        assert_eq!(player.field().card_count(), 2);
        assert_eq!(player.field().get(0).map(Card::summon_delay), Some(3));
        assert_eq!(player.field().get(1).map(Card::id), Some(CardId::new(1)));
    }

    #[test]
    #[should_panic(expected = "not in Player 0's hand")]
    fn test_summon_unknown_card_panics() {
        struct Bogus;
        impl GameUi for Bogus {
            fn summon_cards(&mut self, _stage: &StageInfo) -> Vec<CardId> {
                vec![CardId::new(999)]
            }
        }

        let mut engine = GameEngine::new(Bogus, Rule::default());
        engine
            .register_players(PlayerInfo::new("A", 20), PlayerInfo::new("B", 20))
            .unwrap();
        engine.summon_cards();
    }

    #[test]
    fn test_round_end_ticks_delays_and_toggles() {
        let mut engine = engine();
        engine.draw_card();
        let p0 = PlayerId::new(0);

        engine.round_end();

        assert_eq!(engine.stage.round(), 1);
        assert_eq!(engine.stage.active_player_id(), PlayerId::new(1));
        assert!(engine.stage.board()[p0].hand().iter().all(|c| c.summon_delay() == 1));
        assert_eq!(
            events(&engine).last(),
            Some(&GameEvent::PlayerChanged { previous: p0, next: PlayerId::new(1) })
        );

        engine.round_end();
        engine.round_end();
        assert!(engine.stage.board()[p0].hand().iter().all(|c| c.summon_delay() == 0));
        assert_eq!(engine.stage.active_player_id(), PlayerId::new(1));
    }

    #[test]
    fn test_first_phase_changes() {
        let mut engine = engine();
        engine.play_game().unwrap();

        let phases: Vec<_> = events(&engine)
            .iter()
            .filter_map(|e| match e {
                GameEvent::PhaseChanged { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .take(6)
            .collect();
        assert_eq!(
            phases,
            vec![
                (Phase::Start, Phase::Draw),
                (Phase::Draw, Phase::Standby),
                (Phase::Standby, Phase::Summon),
                (Phase::Summon, Phase::Battle),
                (Phase::Battle, Phase::End),
                (Phase::End, Phase::Start),
            ]
        );
    }

    #[test]
    fn test_exhaustion_result_names_opponent_winner() {
        let mut engine = engine_with(
            Rule::default(),
            PlayerInfo::new("A", 20),
            PlayerInfo::new("B", 20).with_deck([CardInfo::new("C", 1, 1)]),
        );

        let result = engine.play_game().unwrap();

        assert_eq!(result.cause, GameEndCause::AllCardsExhausted);
        assert_eq!(result.winner, PlayerId::new(1));
        assert_eq!(result.rounds, 0);
    }
}
