//! Combat resolution system.
//!
//! This module provides the damage formulas and the value types describing an
//! attack's outcome. The actors in [`crate::actor`] call these functions; the
//! functions themselves never touch HP.
//!
//! # Core Functions
//!
//! - `physical_roll`: `(1..=4) * level`, the basic attack of every actor
//! - `Spell::roll`: the hero's d5/d6/d7 spells
//! - `warlock_band`: d100 draw to attack kind for warlock layers

pub mod damage;
pub mod result;

pub use damage::{AttackKind, Spell, physical_roll, warlock_band};
pub use result::{AttackReport, Side, Strike, TurnSummary};
