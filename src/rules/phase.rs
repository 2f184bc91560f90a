//! Round phases.

use serde::{Deserialize, Serialize};

/// One stage of a round.
///
/// The cycle is fixed: Start -> Draw -> Standby -> Summon -> Battle -> End
/// -> Start. The enum is closed, so the driver loop matches it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Draw,
    Standby,
    Summon,
    Battle,
    End,
}

impl Phase {
    /// All phases in cycle order.
    pub const ALL: [Phase; 6] = [
        Phase::Start,
        Phase::Draw,
        Phase::Standby,
        Phase::Summon,
        Phase::Battle,
        Phase::End,
    ];

    /// The phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Phase {
        match self {
            Phase::Start => Phase::Draw,
            Phase::Draw => Phase::Standby,
            Phase::Standby => Phase::Summon,
            Phase::Summon => Phase::Battle,
            Phase::Battle => Phase::End,
            Phase::End => Phase::Start,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Start => "Start",
            Phase::Draw => "Draw",
            Phase::Standby => "Standby",
            Phase::Summon => "Summon",
            Phase::Battle => "Battle",
            Phase::End => "End",
        };
        f.write_str(name)
    }
}
