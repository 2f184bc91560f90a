//! Battle hooks.
//!
//! The battle phase walks the active player's field and calls into a
//! `Resolver` at five fixed points:
//!
//! 1. `pre_attack` - before a card attacks
//! 2. `attack_blocking` - before a card-vs-card attack lands
//! 3. `apply_damage` - to deal the attack's damage
//! 4. `dying` - when `apply_damage` reports a death
//! 5. `post_attack` - after the attack, if the attacker is still on the field
//!
//! Every method has a provided implementation that gives the baseline rules:
//! no pre/post effects, nothing is blocked, damage is plain subtraction, and
//! a dying card goes to its owner's grave. Card abilities are added by
//! implementing `Resolver` on another type and overriding the hooks it
//! needs; the battle phase itself never changes.
//!
//! ## Example
//!
//! ```
//! use rust_duel::core::Board;
//! use rust_duel::effects::{BlockStatus, Resolver};
//! use rust_duel::zones::FieldSlot;
//!
//! /// Cards with a "shield" counter absorb one attack.
//! struct ShieldResolver;
//!
//! impl Resolver for ShieldResolver {
//!     fn attack_blocking(
//!         &mut self,
//!         board: &mut Board,
//!         _attacker: FieldSlot,
//!         defender: FieldSlot,
//!     ) -> BlockStatus {
//!         match board.card_at_mut(defender) {
//!             Some(card) if card.has_flag("shield") => {
//!                 card.set_state("shield", 0);
//!                 BlockStatus::blocked()
//!             }
//!             _ => BlockStatus::open(),
//!         }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Board, PlayerId};
use crate::zones::FieldSlot;

/// Outcome of the blocking hook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStatus {
    /// The attack is stopped with no damage.
    pub blocked: bool,

    /// Another slot takes the hit instead of the defender.
    pub redirect: Option<FieldSlot>,
}

impl BlockStatus {
    /// The attack goes through to the defender.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            blocked: false,
            redirect: None,
        }
    }

    /// The attack is stopped.
    #[must_use]
    pub const fn blocked() -> Self {
        Self {
            blocked: true,
            redirect: None,
        }
    }

    /// The attack lands on `slot` instead of the defender.
    #[must_use]
    pub const fn redirected(slot: FieldSlot) -> Self {
        Self {
            blocked: false,
            redirect: Some(slot),
        }
    }
}

/// Outcome of the damage hook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Damage actually dealt.
    pub dealt: i32,

    /// The target's health reached zero or below.
    pub card_dead: bool,
}

/// Battle hook pipeline.
///
/// Hooks receive the whole board so they can mutate, remove or move cards.
/// Cards are addressed by field slot; a hook that empties the attacker's
/// slot stops the rest of that attacker's sequence.
pub trait Resolver {
    /// Runs before the card in `attacker` attacks `defender`.
    fn pre_attack(&mut self, _board: &mut Board, _attacker: FieldSlot, _defender: PlayerId) {}

    /// Runs after the attack, only if the attacker still holds its slot.
    fn post_attack(&mut self, _board: &mut Board, _attacker: FieldSlot, _defender: PlayerId) {}

    /// Decide whether a card-vs-card attack is blocked or redirected.
    fn attack_blocking(
        &mut self,
        _board: &mut Board,
        _attacker: FieldSlot,
        _defender: FieldSlot,
    ) -> BlockStatus {
        BlockStatus::open()
    }

    /// Deal `amount` damage to the card in `target`.
    fn apply_damage(&mut self, board: &mut Board, target: FieldSlot, amount: i32) -> DamageOutcome {
        match board.card_at_mut(target) {
            Some(card) => DamageOutcome {
                dealt: amount,
                card_dead: card.take_damage(amount),
            },
            None => DamageOutcome::default(),
        }
    }

    /// The card in `victim` died to the card in `killer`.
    ///
    /// Responsible for moving the victim off the field.
    fn dying(&mut self, board: &mut Board, _killer: FieldSlot, victim: FieldSlot) {
        board.send_to_grave(victim);
    }
}

/// Baseline rules with no card abilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultResolver;

impl Resolver for DefaultResolver {}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn pre_attack(&mut self, board: &mut Board, attacker: FieldSlot, defender: PlayerId) {
        (**self).pre_attack(board, attacker, defender);
    }

    fn post_attack(&mut self, board: &mut Board, attacker: FieldSlot, defender: PlayerId) {
        (**self).post_attack(board, attacker, defender);
    }

    fn attack_blocking(
        &mut self,
        board: &mut Board,
        attacker: FieldSlot,
        defender: FieldSlot,
    ) -> BlockStatus {
        (**self).attack_blocking(board, attacker, defender)
    }

    fn apply_damage(&mut self, board: &mut Board, target: FieldSlot, amount: i32) -> DamageOutcome {
        (**self).apply_damage(board, target, amount)
    }

    fn dying(&mut self, board: &mut Board, killer: FieldSlot, victim: FieldSlot) {
        (**self).dying(board, killer, victim);
    }
}
