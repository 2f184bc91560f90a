//! # rust-duel
//!
//! A rules engine for two-player, turn-based card battles.
//!
//! ## Design Principles
//!
//! 1. **Fixed Phase Cycle**: Every round runs Start, Draw, Standby, Summon,
//!    Battle, End. The cycle is a closed enum matched exhaustively.
//!
//! 2. **Positional Battle**: A field card only fights the opposing card in
//!    the same slot; an empty opposing slot means a hit on the hero.
//!
//! 3. **Hooks Over Subclassing**: Card abilities plug in through the
//!    `Resolver` trait. The battle algorithm never changes to add one.
//!
//! 4. **Typed Termination**: Phase handlers return `Result<(), GameOver>`,
//!    so ending a match is a value that travels up with `?`.
//!
//! ## Modules
//!
//! - `core`: Players, board, rule, stage context, RNG
//! - `cards`: Card blueprints and instances
//! - `zones`: Deck, hand, field, grave
//! - `effects`: The `Resolver` hook pipeline
//! - `rules`: `GameEngine`, phases, results, errors
//! - `ui`: The `GameUi` collaborator and bundled implementations

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod rules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{Board, GameRng, Player, PlayerId, PlayerInfo, Rule, StageInfo};

pub use crate::cards::{Card, CardId, CardInfo};

pub use crate::zones::{Deck, Field, FieldSlot, Grave, Hand};

pub use crate::effects::{BlockStatus, DamageOutcome, DefaultResolver, Resolver};

pub use crate::rules::{EngineError, GameEndCause, GameEngine, GameOver, GameResult, Phase};

pub use crate::ui::{EventRecorder, GameEvent, GameUi, NeverSummon, RandomSummon, SummonReady};
