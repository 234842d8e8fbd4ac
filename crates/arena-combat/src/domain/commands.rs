//! Commands for the combat context.

use arena_core::command::Command;
use uuid::Uuid;

use super::combatant::Combatant;

/// Command to fight two combatants to a result.
#[derive(Debug, Clone)]
pub struct StartBattle {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The combatant listed first in the outcome.
    pub first: Combatant,
    /// The combatant listed second in the outcome.
    pub second: Combatant,
}

impl Command for StartBattle {
    fn command_type(&self) -> &'static str {
        "combat.start_battle"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
