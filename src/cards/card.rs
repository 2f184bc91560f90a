//! Cards: caller-supplied blueprints and runtime instances.
//!
//! `CardInfo` is what callers hand to the engine when building decks.
//! `Card` is the runtime instance the engine moves between zones.
//!
//! ## Identity
//!
//! Every `Card` gets a unique `CardId` when players are registered. The id
//! never changes while the card moves Deck -> Hand -> Field -> Grave, so
//! collaborators and resolvers can always refer to a card by id.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Unique identifier for a card instance within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card blueprint.
///
/// ## Example
///
/// ```
/// use rust_duel::cards::CardInfo;
///
/// let knight = CardInfo::new("Knight", 3, 5).with_summon_delay(2);
/// assert_eq!(knight.attack, 3);
/// assert_eq!(knight.summon_delay, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Display name.
    pub name: String,
    /// Base attack.
    pub attack: i32,
    /// Base health.
    pub health: i32,
    /// Base summon delay (rounds spent in hand).
    #[serde(default)]
    pub summon_delay: u32,
}

impl CardInfo {
    /// Create a blueprint with no summon delay.
    pub fn new(name: impl Into<String>, attack: i32, health: i32) -> Self {
        Self {
            name: name.into(),
            attack,
            health,
            summon_delay: 0,
        }
    }

    /// Set the base summon delay.
    #[must_use]
    pub fn with_summon_delay(mut self, delay: u32) -> Self {
        self.summon_delay = delay;
        self
    }
}

/// A card instance in a match.
///
/// Base values come from the `CardInfo` the card was built from; the
/// current values are what battle reads and mutates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    owner: PlayerId,
    name: String,

    base_attack: i32,
    base_health: i32,
    base_summon_delay: u32,

    attack: i32,
    health: i32,
    summon_delay: u32,

    /// Free-form counters for resolver-defined abilities.
    #[serde(default)]
    state: FxHashMap<String, i64>,
}

impl Card {
    /// Build a card instance from a blueprint.
    #[must_use]
    pub fn from_info(id: CardId, owner: PlayerId, info: &CardInfo) -> Self {
        Self {
            id,
            owner,
            name: info.name.clone(),
            base_attack: info.attack,
            base_health: info.health,
            base_summon_delay: info.summon_delay,
            attack: info.attack,
            health: info.health,
            summon_delay: info.summon_delay,
            state: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current attack value.
    #[must_use]
    pub fn attack(&self) -> i32 {
        self.attack
    }

    /// Current health.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Current summon delay.
    #[must_use]
    pub fn summon_delay(&self) -> u32 {
        self.summon_delay
    }

    #[must_use]
    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    #[must_use]
    pub fn base_health(&self) -> i32 {
        self.base_health
    }

    #[must_use]
    pub fn base_summon_delay(&self) -> u32 {
        self.base_summon_delay
    }

    pub fn set_attack(&mut self, attack: i32) {
        self.attack = attack;
    }

    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    pub fn set_summon_delay(&mut self, delay: u32) {
        self.summon_delay = delay;
    }

    /// Is the card's health at or below zero?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Subtract `amount` from health. Returns `true` if the card is now dead.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.is_dead()
    }

    /// Restore the summon delay to its base value (done on draw).
    pub fn reset_summon_delay(&mut self) {
        self.summon_delay = self.base_summon_delay;
    }

    /// Count the summon delay down by one round, stopping at zero.
    pub fn tick_summon_delay(&mut self) {
        self.summon_delay = self.summon_delay.saturating_sub(1);
    }

    /// Reset to the "freshly summoned" state.
    ///
    /// Restores attack, health and summon delay to base and drops any
    /// ability counters.
    pub fn reset(&mut self) {
        self.attack = self.base_attack;
        self.health = self.base_health;
        self.summon_delay = self.base_summon_delay;
        self.state.clear();
    }

    /// Get an ability counter with a default.
    #[must_use]
    pub fn get_state(&self, key: &str, default: i64) -> i64 {
        self.state.get(key).copied().unwrap_or(default)
    }

    /// Set an ability counter.
    pub fn set_state(&mut self, key: impl Into<String>, value: i64) {
        self.state.insert(key.into(), value);
    }

    /// Modify an ability counter by delta.
    pub fn modify_state(&mut self, key: &str, delta: i64) {
        let current = self.get_state(key, 0);
        self.state.insert(key.to_string(), current + delta);
    }

    /// Check if a counter is set (non-zero).
    #[must_use]
    pub fn has_flag(&self, key: &str) -> bool {
        self.get_state(key, 0) != 0
    }
}
