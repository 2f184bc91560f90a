//! Match termination and results.
//!
//! ## GameOver
//!
//! Phase handlers return `Result<(), GameOver>`. A `GameOver` travels up
//! with `?` to the driver loop, which is the only place that turns it into
//! a `GameResult`. Because it is a `Result`, a handler cannot silently drop
//! a termination.
//!
//! ## Winner attribution
//!
//! - Round limit: the first registered player wins.
//! - Hero death / card exhaustion: the signal names the losing player; the
//!   other player wins.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player, PlayerId};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEndCause {
    /// The round counter passed `Rule::max_round`.
    RoundLimitExceeded,
    /// A hero's life reached zero or below from a hero attack.
    HeroDied,
    /// The active player had no cards in deck, hand or field.
    AllCardsExhausted,
}

impl std::fmt::Display for GameEndCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameEndCause::RoundLimitExceeded => "round limit exceeded",
            GameEndCause::HeroDied => "hero died",
            GameEndCause::AllCardsExhausted => "all cards exhausted",
        };
        f.write_str(text)
    }
}

/// Termination signal raised by a phase handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOver {
    RoundLimitExceeded,
    HeroDied { player: PlayerId },
    AllCardsExhausted { player: PlayerId },
}

impl GameOver {
    #[must_use]
    pub fn cause(self) -> GameEndCause {
        match self {
            GameOver::RoundLimitExceeded => GameEndCause::RoundLimitExceeded,
            GameOver::HeroDied { .. } => GameEndCause::HeroDied,
            GameOver::AllCardsExhausted { .. } => GameEndCause::AllCardsExhausted,
        }
    }

    /// The player who triggered the condition, if the signal names one.
    #[must_use]
    pub fn losing_player(self) -> Option<PlayerId> {
        match self {
            GameOver::RoundLimitExceeded => None,
            GameOver::HeroDied { player } | GameOver::AllCardsExhausted { player } => Some(player),
        }
    }
}

/// Final outcome of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Board as it stood when the match ended.
    pub board: Board,
    pub winner: PlayerId,
    /// Round counter at termination.
    pub rounds: u32,
    pub cause: GameEndCause,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }

    /// The winning player's final state.
    #[must_use]
    pub fn winning_player(&self) -> Option<&Player> {
        self.board.player(self.winner)
    }
}
