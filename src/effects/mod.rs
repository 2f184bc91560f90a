//! Battle-resolution hooks.
//!
//! The `Resolver` trait is the extension point for card abilities. The
//! battle phase calls it at fixed points and never interprets specific
//! card effects itself.

pub mod resolver;

pub use resolver::{BlockStatus, DamageOutcome, DefaultResolver, Resolver};
