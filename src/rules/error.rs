//! Engine API errors.
//!
//! These cover misuse of the engine's lifecycle. They are unrelated to
//! match termination, which is reported through `GameResult`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("players are already registered for this match")]
    PlayersAlreadyRegistered,

    #[error("players must be registered before the match is played")]
    PlayersNotRegistered,

    #[error("this match has already been played")]
    MatchAlreadyPlayed,
}
