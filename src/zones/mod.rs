//! Per-player card zones.
//!
//! Every card sits in exactly one zone of exactly one player:
//! - `Deck`: ordered draw pile (top = next draw)
//! - `Hand`: cards drawn but not yet summoned
//! - `Field`: positional battlefield slots
//! - `Grave`: dead cards, append-only
//!
//! Cards are owned values, so moving a card between zones moves it; it can
//! never be duplicated or dropped by a zone transfer.

pub mod deck;
pub mod field;
pub mod grave;
pub mod hand;

pub use deck::Deck;
pub use field::{Field, FieldSlot};
pub use grave::Grave;
pub use hand::Hand;
