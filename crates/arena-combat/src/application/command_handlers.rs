//! Command handlers for the combat context.
//!
//! This is the host-facing entry point: validate the command, run the
//! resolver, and wrap the outcome in an event the host can persist.

use std::sync::Mutex;

use arena_core::clock::Clock;
use arena_core::command::Command;
use arena_core::config::ArenaConfig;
use arena_core::error::DomainError;
use arena_core::event::EventMetadata;
use arena_core::rng::DeterministicRng;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::commands::StartBattle;
use crate::domain::events::{BattleEvent, BattleEventKind, BattleResolved};
use crate::domain::resolver::{resolve, resolve_with_limit};

/// Handles the `StartBattle` command: validates both combatants, resolves
/// the battle with the configured die, and returns a `BattleResolved` event.
///
/// The resolver itself accepts anything; rejecting unfit combatants and
/// self-battles happens here. The RNG is locked only for the resolution.
///
/// # Errors
///
/// Returns `DomainError::Validation` if either combatant fails validation or
/// both sides share an identifier, `DomainError::NoWinner` if the configured
/// round limit is reached, and `DomainError::Infrastructure` if the RNG
/// mutex is poisoned.
#[instrument(
    skip(command, config, clock, rng),
    fields(
        command_type = command.command_type(),
        first_id = %command.first.id,
        second_id = %command.second.id
    )
)]
pub fn handle_start_battle(
    command: &StartBattle,
    config: &ArenaConfig,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<BattleEvent, DomainError> {
    info!(correlation_id = %command.correlation_id, "handling start_battle command");

    command.first.validate()?;
    command.second.validate()?;
    if command.first.id == command.second.id {
        return Err(DomainError::Validation(format!(
            "combatant {} cannot battle itself",
            command.first.id
        )));
    }

    let outcome = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        match config.round_limit {
            Some(max_rounds) => resolve_with_limit(
                config.dice_sides,
                &command.first,
                &command.second,
                max_rounds,
                &mut *rng_guard,
            )?,
            None => resolve(
                config.dice_sides,
                &command.first,
                &command.second,
                &mut *rng_guard,
            ),
        }
    };

    info!(
        correlation_id = %command.correlation_id,
        winner_id = %outcome.winner_id,
        turns = outcome.turns,
        "battle resolved"
    );

    Ok(BattleEvent {
        metadata: EventMetadata {
            event_id: Uuid::new_v4(),
            event_type: "combat.battle_resolved".to_owned(),
            correlation_id: command.correlation_id(),
            occurred_at: clock.now(),
        },
        kind: BattleEventKind::BattleResolved(BattleResolved { outcome }),
    })
}
