//! Combat resolver.
//!
//! A battle is a sequence of rounds. Each round:
//!
//! 1. Both sides roll a d100 for initiative, re-rolling ties. The higher
//!    roll strikes first. Tied attempts do not count as rounds.
//! 2. The striker adds a combat die to its attack, the target adds one to
//!    its defense, and the target loses the difference if the attack is
//!    higher. HP is allowed to drop below zero.
//! 3. If the target is still above zero HP it strikes back the same way.
//! 4. If the round's striker is at or below zero HP the target wins;
//!    otherwise if the target is at or below zero the striker wins;
//!    otherwise another round starts.

use arena_core::error::DomainError;
use arena_core::rng::DeterministicRng;
use tracing::{debug, trace};

use super::combatant::{Combatant, CombatantId};
use super::dice::{INITIATIVE_SIDES, roll_plain};
use super::outcome::BattleOutcome;

/// One strike within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttackReport {
    attacker_id: CombatantId,
    defender_id: CombatantId,
    /// Attack stat plus the attacker's die.
    attack_total: i32,
    /// Defense stat plus the defender's die.
    defense_total: i32,
    /// HP removed from the defender. Never negative.
    damage: i32,
}

/// Working copy of a combatant's stats for the length of one battle.
#[derive(Debug, Clone, Copy)]
struct Fighter {
    id: CombatantId,
    hp: i32,
    attack: i32,
    defense: i32,
}

impl From<&Combatant> for Fighter {
    fn from(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            hp: combatant.hp,
            attack: combatant.attack,
            defense: combatant.defense,
        }
    }
}

#[derive(Debug)]
struct Battle {
    dice_sides: u32,
    first: Fighter,
    second: Fighter,
    turns: u32,
}

impl Battle {
    fn new(dice_sides: u32, first: &Combatant, second: &Combatant) -> Self {
        assert!(
            dice_sides >= 1,
            "combat die needs at least one side, got {dice_sides}"
        );
        Self {
            dice_sides,
            first: Fighter::from(first),
            second: Fighter::from(second),
            turns: 1,
        }
    }

    /// Plays one full round. Returns the outcome if the round was decisive.
    fn play_round(&mut self, rng: &mut dyn DeterministicRng) -> Option<BattleOutcome> {
        let dice_sides = self.dice_sides;
        let (attacker, defender) = if roll_initiative(rng) {
            (&mut self.first, &mut self.second)
        } else {
            (&mut self.second, &mut self.first)
        };

        let opening = strike(attacker, defender, dice_sides, rng);
        let counter_damage = if defender.hp > 0 {
            strike(defender, attacker, dice_sides, rng).damage
        } else {
            0
        };

        debug!(
            round = self.turns,
            attacker = %attacker.id,
            attacker_hp = attacker.hp,
            defender = %defender.id,
            defender_hp = defender.hp,
            opening_damage = opening.damage,
            counter_damage,
            "round finished"
        );

        let winner_id = if attacker.hp <= 0 {
            defender.id
        } else if defender.hp <= 0 {
            attacker.id
        } else {
            self.turns += 1;
            return None;
        };

        let outcome = BattleOutcome {
            first_id: self.first.id,
            second_id: self.second.id,
            winner_id,
            turns: self.turns,
        };
        debug!(winner = %winner_id, turns = outcome.turns, "battle decided");
        Some(outcome)
    }
}

/// Rolls initiative until the two d100s differ. Returns `true` when the
/// first combatant leads.
fn roll_initiative(rng: &mut dyn DeterministicRng) -> bool {
    loop {
        let first = roll_plain(rng, INITIATIVE_SIDES);
        let second = roll_plain(rng, INITIATIVE_SIDES);
        if first != second {
            return first > second;
        }
        trace!(roll = first, "initiative tied, rerolling");
    }
}

/// Converts a die value to stat arithmetic, clamping faces past `i32::MAX`.
fn die_value(roll: u32) -> i32 {
    i32::try_from(roll).unwrap_or(i32::MAX)
}

fn strike(
    attacker: &Fighter,
    defender: &mut Fighter,
    dice_sides: u32,
    rng: &mut dyn DeterministicRng,
) -> AttackReport {
    let attack_total = attacker
        .attack
        .saturating_add(die_value(roll_plain(rng, dice_sides)));
    let defense_total = defender
        .defense
        .saturating_add(die_value(roll_plain(rng, dice_sides)));
    let damage = attack_total.saturating_sub(defense_total).max(0);
    defender.hp = defender.hp.saturating_sub(damage);

    let report = AttackReport {
        attacker_id: attacker.id,
        defender_id: defender.id,
        attack_total,
        defense_total,
        damage,
    };
    trace!(
        attacker = %report.attacker_id,
        defender = %report.defender_id,
        attack_total = report.attack_total,
        defense_total = report.defense_total,
        damage = report.damage,
        defender_hp = defender.hp,
        "strike"
    );
    report
}

/// Fights `first` against `second` until one of them falls.
///
/// The combatants are copied; the caller's values are never changed.
/// Termination is probabilistic: with a random source that keeps producing
/// harmless rolls the loop never ends. Use `resolve_with_limit` to bound it.
///
/// # Panics
///
/// Panics if `dice_sides` is zero.
pub fn resolve(
    dice_sides: u32,
    first: &Combatant,
    second: &Combatant,
    rng: &mut dyn DeterministicRng,
) -> BattleOutcome {
    let mut battle = Battle::new(dice_sides, first, second);
    loop {
        if let Some(outcome) = battle.play_round(rng) {
            return outcome;
        }
    }
}

/// Like `resolve`, but gives up after `max_rounds` indecisive rounds.
///
/// # Errors
///
/// Returns `DomainError::NoWinner` if nobody has fallen after `max_rounds`
/// rounds.
///
/// # Panics
///
/// Panics if `dice_sides` is zero.
pub fn resolve_with_limit(
    dice_sides: u32,
    first: &Combatant,
    second: &Combatant,
    max_rounds: u32,
    rng: &mut dyn DeterministicRng,
) -> Result<BattleOutcome, DomainError> {
    let mut battle = Battle::new(dice_sides, first, second);
    for _ in 0..max_rounds {
        if let Some(outcome) = battle.play_round(rng) {
            return Ok(outcome);
        }
    }
    Err(DomainError::NoWinner { rounds: max_rounds })
}
