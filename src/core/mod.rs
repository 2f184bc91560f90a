//! Core match types: players, board, rule, stage context, RNG.

pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod stage;

pub use board::Board;
pub use config::Rule;
pub use player::{Player, PlayerId, PlayerInfo};
pub use rng::GameRng;
pub use stage::StageInfo;
