//! The engine's collaborator: decisions in, notifications out.
//!
//! - `GameUi`: the trait the engine talks to
//! - `NeverSummon`, `SummonReady`, `RandomSummon`: bundled decision providers
//! - `EventRecorder`: forwards to another `GameUi` and keeps a `GameEvent` log

pub mod game_ui;
pub mod policy;
pub mod recorder;

pub use game_ui::GameUi;
pub use policy::{NeverSummon, RandomSummon, SummonReady};
pub use recorder::{EventRecorder, GameEvent};
