//! Card blueprints and runtime card instances.
//!
//! - `CardInfo`: immutable data supplied by callers when building decks
//! - `Card`: the instance that lives in exactly one zone at a time

pub mod card;

pub use card::{Card, CardId, CardInfo};
