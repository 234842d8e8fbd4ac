//! Combat domain: dice, combatants, and battle resolution.

pub mod combatant;
pub mod commands;
pub mod dice;
pub mod events;
pub mod outcome;
pub mod resolver;
