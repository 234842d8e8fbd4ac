//! Battle outcome record.

use serde::{Deserialize, Serialize};

use super::combatant::CombatantId;

/// The result of one resolved battle, handed to the host to store as-is.
///
/// `winner_id` is always `first_id` or `second_id`, and `turns` is at
/// least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// The combatant passed first.
    pub first_id: CombatantId,
    /// The combatant passed second.
    pub second_id: CombatantId,
    /// The combatant left standing.
    pub winner_id: CombatantId,
    /// Rounds fought, counting the deciding one.
    pub turns: u32,
}

impl BattleOutcome {
    /// The combatant that fell.
    #[must_use]
    pub fn loser_id(&self) -> CombatantId {
        if self.winner_id == self.first_id {
            self.second_id
        } else {
            self.first_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loser_id_is_the_other_side() {
        let outcome = BattleOutcome {
            first_id: CombatantId(1),
            second_id: CombatantId(2),
            winner_id: CombatantId(2),
            turns: 4,
        };

        assert_eq!(outcome.loser_id(), CombatantId(1));
    }

    #[test]
    fn test_serializes_flat_record() {
        let outcome = BattleOutcome {
            first_id: CombatantId(1),
            second_id: CombatantId(2),
            winner_id: CombatantId(1),
            turns: 10,
        };

        let json = serde_json::to_value(outcome).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "first_id": 1,
                "second_id": 2,
                "winner_id": 1,
                "turns": 10
            })
        );
    }
}
