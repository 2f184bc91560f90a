//! Mutable match context.
//!
//! `StageInfo` holds everything a phase handler reads or mutates: the board,
//! the rule, the round counter and the active-player cursor. One instance
//! exists per `GameEngine` and lives exactly as long as the match.

use super::board::Board;
use super::config::Rule;
use super::player::{Player, PlayerId};

/// Match context shared by the phase handlers.
#[derive(Clone, Debug)]
pub struct StageInfo {
    board: Board,
    rule: Rule,
    round: u32,
    active_player: PlayerId,
}

impl StageInfo {
    /// Create a context for a fresh match: round 0, player 0 active.
    #[must_use]
    pub fn new(board: Board, rule: Rule) -> Self {
        Self {
            board,
            rule,
            round: 0,
            active_player: PlayerId::new(0),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Current round (0-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn set_round(&mut self, round: u32) {
        self.round = round;
    }

    #[must_use]
    pub fn active_player_id(&self) -> PlayerId {
        self.active_player
    }

    pub fn set_active_player_id(&mut self, player: PlayerId) {
        self.active_player = player;
    }

    /// The opponent of the active player.
    ///
    /// Battle pairs exactly two players, so this is the single other seat.
    #[must_use]
    pub fn inactive_player_id(&self) -> PlayerId {
        self.active_player.next(self.board.player_count())
    }

    /// The other side of a two-player match from `player`.
    #[must_use]
    pub fn opponent_of(&self, player: PlayerId) -> PlayerId {
        if player == self.active_player {
            self.inactive_player_id()
        } else {
            self.active_player
        }
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.board[self.active_player]
    }

    #[must_use]
    pub fn inactive_player(&self) -> &Player {
        &self.board[self.inactive_player_id()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerInfo;

    fn stage() -> StageInfo {
        let mut board = Board::new();
        let mut next_id = 0;
        board.add_player(Player::from_info(
            PlayerId::new(0),
            &PlayerInfo::new("A", 20),
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
    fn test_new_stage_defaults() {
        let stage = stage();

        assert_eq!(stage.round(), 0);
        assert_eq!(stage.active_player_id(), PlayerId::new(0));
        assert_eq!(stage.inactive_player_id(), PlayerId::new(1));
        assert_eq!(stage.active_player().name(), "A");
        assert_eq!(stage.inactive_player().name(), "B");
    }

    #[test]
    fn test_opponent_of() {
        let mut stage = stage();
        stage.set_active_player_id(PlayerId::new(1));

        assert_eq!(stage.opponent_of(PlayerId::new(1)), PlayerId::new(0));
        assert_eq!(stage.opponent_of(PlayerId::new(0)), PlayerId::new(1));
    }
}
