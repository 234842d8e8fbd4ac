//! Domain events for the combat context.

use arena_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::outcome::BattleOutcome;

/// Emitted when a battle has produced a winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleResolved {
    /// The finished battle.
    pub outcome: BattleOutcome,
}

/// Event payload variants for the combat context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEventKind {
    /// A battle has produced a winner.
    BattleResolved(BattleResolved),
}

/// Domain event envelope for the combat context.
#[derive(Debug, Clone)]
pub struct BattleEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: BattleEventKind,
}

impl DomainEvent for BattleEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            BattleEventKind::BattleResolved(_) => "combat.battle_resolved",
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("BattleEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
