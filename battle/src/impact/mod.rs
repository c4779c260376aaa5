//! Damage impact estimates
//!
//! Damage itself comes from an external calculator behind
//! [`DamageCalculator`]; this module picks what to tell it and turns its
//! answer into a share of the defender's HP.

mod aggregate;
mod calculator;

pub use aggregate::{ImpactRange, ImpactUnavailable, MoveImpacts, impact, move_impacts};
pub use calculator::{CalcError, CalcInput, DamageCalculator, DamageOutcome};
