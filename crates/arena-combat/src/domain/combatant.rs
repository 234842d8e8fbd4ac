//! Combatant snapshots handed to the engine by its host.

use std::fmt;

use arena_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Opaque combatant identifier, unique within the host's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombatantId(pub i64);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A combatant's identity and fighting stats.
///
/// The engine only ever borrows these. HP changes during a battle happen on
/// private copies, so a snapshot is never altered by resolving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Identifier.
    pub id: CombatantId,
    /// Display name.
    pub name: String,
    /// Current health.
    pub hp: i32,
    /// Offensive base value.
    pub attack: i32,
    /// Defensive base value.
    pub defense: i32,
}

impl Combatant {
    /// Creates a new combatant snapshot.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, hp: i32, attack: i32, defense: i32) -> Self {
        Self {
            id: CombatantId(id),
            name: name.into(),
            hp,
            attack,
            defense,
        }
    }

    /// Checks that the combatant is fit to enter a battle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if HP is not positive or attack or
    /// defense is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.hp <= 0 {
            return Err(DomainError::Validation(format!(
                "combatant {} must enter battle with positive hp, got {}",
                self.id, self.hp
            )));
        }
        if self.attack < 0 {
            return Err(DomainError::Validation(format!(
                "combatant {} has negative attack {}",
                self.id, self.attack
            )));
        }
        if self.defense < 0 {
            return Err(DomainError::Validation(format!(
                "combatant {} has negative defense {}",
                self.id, self.defense
            )));
        }
        Ok(())
    }
}
