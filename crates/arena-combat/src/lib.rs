//! Arena — Combat bounded context.
//!
//! Responsible for dice, turn-based battle resolution between two
//! combatant snapshots, and the `combat.battle_resolved` event handed back
//! to the host for storage.

pub mod application;
pub mod domain;
