//! Caravan rules: placement legality, Face card effects, scoring.
//!
//! `RulesEngine` is pure with respect to everything except the caravan it is
//! handed, so the same engine serves the game loop, move enumeration and
//! tests alike.

pub mod engine;
pub mod effect;

pub use engine::{Placement, RulesEngine};
pub use effect::EffectResult;
