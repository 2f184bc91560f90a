//! The match driver and its outcome types.
//!
//! - `GameEngine`: phase state machine and battle pipeline
//! - `Phase`: the fixed round cycle
//! - `GameOver`: termination signal returned by phase handlers
//! - `GameResult` / `GameEndCause`: what a finished match reports
//! - `EngineError`: lifecycle misuse (registering twice, playing twice)

pub mod engine;
pub mod error;
pub mod phase;
pub mod result;

pub use engine::GameEngine;
pub use error::EngineError;
pub use phase::Phase;
pub use result::{GameEndCause, GameOver, GameResult};
