//! Bundled summon decision providers.
//!
//! - `NeverSummon`: keeps every card in hand
//! - `SummonReady`: summons each hand card whose summon delay has run out
//! - `RandomSummon`: seeded coin flip per hand card, for simulations

use crate::cards::{Card, CardId};
use crate::core::{GameRng, StageInfo};

use super::GameUi;

/// Never summons anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverSummon;

impl GameUi for NeverSummon {
    fn summon_cards(&mut self, _stage: &StageInfo) -> Vec<CardId> {
        Vec::new()
    }
}

/// Summons every hand card with a summon delay of zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummonReady;

impl GameUi for SummonReady {
    fn summon_cards(&mut self, stage: &StageInfo) -> Vec<CardId> {
        stage
            .active_player()
            .hand()
            .iter()
            .filter(|card| card.summon_delay() == 0)
            .map(Card::id)
            .collect()
    }
}

/// Summons each hand card with a fixed probability.
#[derive(Clone, Debug)]
pub struct RandomSummon {
    rng: GameRng,
    probability: f64,
}

impl RandomSummon {
    /// `probability` is clamped to `[0, 1]`; NaN means never summon.
    #[must_use]
    pub fn new(seed: u64, probability: f64) -> Self {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        Self {
            rng: GameRng::new(seed),
            probability,
        }
    }
}

impl GameUi for RandomSummon {
    fn summon_cards(&mut self, stage: &StageInfo) -> Vec<CardId> {
        let hand: Vec<CardId> = stage.active_player().hand().iter().map(Card::id).collect();
        hand.into_iter()
            .filter(|_| self.rng.gen_bool(self.probability))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardInfo;
    use crate::core::{Board, Player, PlayerId, PlayerInfo, Rule};

    fn stage() -> StageInfo {
        let hand = [
            CardInfo::new("Ready", 1, 1),
            CardInfo::new("Waiting", 1, 1).with_summon_delay(2),
            CardInfo::new("Ready too", 1, 1),
        ];
        let mut next_id = 0;
        let mut board = Board::new();
        board.add_player(Player::from_info(
            PlayerId::new(0),
            &PlayerInfo::new("A", 20).with_hand(hand),
            &mut next_id,
        ));
        board.add_player(Player::from_info(
            PlayerId::new(1),
            &PlayerInfo::new("B", 20),
            &mut next_id,
        ));
        StageInfo::new(board, Rule::default())
    }

    #[test]
    fn test_never_summon() {
        assert!(NeverSummon.summon_cards(&stage()).is_empty());
    }

    #[test]
    fn test_summon_ready_skips_delayed_cards() {
        let chosen = SummonReady.summon_cards(&stage());
        assert_eq!(chosen, vec![CardId::new(0), CardId::new(2)]);
    }

    #[test]
    fn test_random_summon_extremes() {
        let stage = stage();

        assert_eq!(RandomSummon::new(1, 1.0).summon_cards(&stage).len(), 3);
        assert!(RandomSummon::new(1, 0.0).summon_cards(&stage).is_empty());
    }

    #[test]
    fn test_random_summon_odd_probabilities() {
        let stage = stage();

        assert!(RandomSummon::new(1, f64::NAN).summon_cards(&stage).is_empty());
        assert!(RandomSummon::new(1, f64::NEG_INFINITY).summon_cards(&stage).is_empty());
        assert_eq!(RandomSummon::new(1, f64::INFINITY).summon_cards(&stage).len(), 3);
    }

    #[test]
    fn test_random_summon_only_picks_hand_cards() {
        let stage = stage();
        let mut policy = RandomSummon::new(99, 0.5);

        for _ in 0..20 {
            for id in policy.summon_cards(&stage) {
                assert!(stage.active_player().hand().contains(id));
            }
        }
    }
}
