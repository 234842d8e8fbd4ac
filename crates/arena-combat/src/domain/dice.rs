//! Dice engine.
//!
//! Plain dice land uniformly on `[1, sides]`. Exploding dice keep rolling
//! while they land on their top face, within a budget of rolls, and
//! accumulate every roll into one total. A die with zero sides is a
//! programming error and panics.

use arena_core::rng::DeterministicRng;
use tracing::trace;

/// Faces on the die used to decide who strikes first each round.
pub const INITIATIVE_SIDES: u32 = 100;

/// How a die behaves when it lands on its top face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieKind {
    /// A single roll, no bonus.
    Plain,
    /// Re-roll and accumulate on the top face, up to `max_explosions` rolls.
    Exploding {
        /// Budget of rolls in one chain. Zero still rolls once.
        max_explosions: u32,
    },
}

/// A die specification: face count plus behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    sides: u32,
    kind: DieKind,
}

/// The result of rolling a `Die`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Sum of every individual roll.
    pub total: u64,
    /// Number of rolls that landed on the top face. Equals `rolls.len() - 1`
    /// when the chain stopped below the top face, and `rolls.len()` when it
    /// ran out of budget.
    pub explosions: u32,
    /// Each roll in the order it was made.
    pub rolls: Vec<u32>,
}

impl RollOutcome {
    fn single(roll: u32) -> Self {
        Self {
            total: u64::from(roll),
            explosions: 0,
            rolls: vec![roll],
        }
    }
}

impl Die {
    /// A plain die with `sides` faces.
    ///
    /// # Panics
    ///
    /// Panics if `sides` is zero.
    #[must_use]
    pub fn plain(sides: u32) -> Self {
        assert_sides(sides);
        Self {
            sides,
            kind: DieKind::Plain,
        }
    }

    /// An exploding die with `sides` faces that rolls at most
    /// `max_explosions` times per chain.
    ///
    /// # Panics
    ///
    /// Panics if `sides` is zero.
    #[must_use]
    pub fn exploding(sides: u32, max_explosions: u32) -> Self {
        assert_sides(sides);
        Self {
            sides,
            kind: DieKind::Exploding { max_explosions },
        }
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Plain or exploding.
    #[must_use]
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// Rolls the die once (or once per explosion).
    pub fn roll(&self, rng: &mut dyn DeterministicRng) -> RollOutcome {
        match self.kind {
            DieKind::Plain => RollOutcome::single(roll_plain(rng, self.sides)),
            DieKind::Exploding { max_explosions } => {
                roll_exploding(rng, self.sides, max_explosions)
            }
        }
    }
}

fn assert_sides(sides: u32) {
    assert!(sides >= 1, "a die needs at least one side, got {sides}");
}

/// Rolls a single die, returning a value in `[1, sides]`.
///
/// A one-sided die always lands on 1 and does not consume randomness.
///
/// # Panics
///
/// Panics if `sides` is zero.
pub fn roll_plain(rng: &mut dyn DeterministicRng, sides: u32) -> u32 {
    assert_sides(sides);
    if sides == 1 {
        return 1;
    }
    rng.next_u32_range(1, sides)
}

/// Rolls an exploding die.
///
/// `max_explosions` is the budget of rolls in the chain, with zero treated
/// as one. The chain stops at the first roll below `sides` or when the
/// budget is spent, so a one-sided die always explodes exactly
/// `max_explosions` times and totals `max_explosions`.
///
/// # Panics
///
/// Panics if `sides` is zero.
pub fn roll_exploding(
    rng: &mut dyn DeterministicRng,
    sides: u32,
    max_explosions: u32,
) -> RollOutcome {
    let budget = max_explosions.max(1);
    let mut outcome = RollOutcome {
        total: 0,
        explosions: 0,
        rolls: Vec::new(),
    };

    loop {
        let roll = roll_plain(rng, sides);
        outcome.total += u64::from(roll);
        outcome.rolls.push(roll);
        if roll != sides {
            break;
        }
        outcome.explosions += 1;
        trace!(sides, explosions = outcome.explosions, "die exploded");
        if outcome.explosions >= budget {
            break;
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use arena_core::rng::SeededRng;
    use arena_test_support::{MockRng, SequenceRng};

    use super::*;

    // --- roll_plain ---

    #[test]
    fn test_roll_plain_stays_in_range_and_reaches_both_ends() {
        let mut rng = SeededRng::from_seed(42);

        for sides in [2_u32, 6, 10, 20] {
            let mut seen_one = false;
            let mut seen_max = false;
            for _ in 0..2_000 {
                let roll = roll_plain(&mut rng, sides);
                assert!((1..=sides).contains(&roll), "d{sides} rolled {roll}");
                seen_one |= roll == 1;
                seen_max |= roll == sides;
            }
            assert!(seen_one, "d{sides} never rolled 1");
            assert!(seen_max, "d{sides} never rolled {sides}");
        }
    }

    #[test]
    fn test_roll_plain_one_sided_die_skips_the_rng() {
        let mut rng = SequenceRng::new(vec![]);

        assert_eq!(roll_plain(&mut rng, 1), 1);
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_roll_plain_passes_through_rng_value() {
        let mut rng = SequenceRng::new(vec![4]);
        assert_eq!(roll_plain(&mut rng, 6), 4);
    }

    #[test]
    #[should_panic(expected = "a die needs at least one side")]
    fn test_roll_plain_zero_sides_panics() {
        roll_plain(&mut MockRng, 0);
    }

    // --- roll_exploding ---

    #[test]
    fn test_roll_exploding_stops_below_top_face() {
        let mut rng = SequenceRng::new(vec![6, 6, 3]);

        let outcome = roll_exploding(&mut rng, 6, 5);

        assert_eq!(outcome.rolls, vec![6, 6, 3]);
        assert_eq!(outcome.explosions, 2);
        assert_eq!(outcome.total, 15);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_roll_exploding_no_explosion_on_low_roll() {
        let mut rng = SequenceRng::new(vec![2]);

        let outcome = roll_exploding(&mut rng, 6, 5);

        assert_eq!(outcome, RollOutcome::single(2));
    }

    #[test]
    fn test_roll_exploding_respects_cap() {
        // A budget of two rolls ends the chain even on the top face.
        let mut rng = SequenceRng::new(vec![8, 8, 8, 8]);

        let outcome = roll_exploding(&mut rng, 8, 2);

        assert_eq!(outcome.rolls, vec![8, 8]);
        assert_eq!(outcome.explosions, 2);
        assert_eq!(outcome.total, 16);
        assert_eq!(rng.remaining(), 2);
    }

    #[test]
    fn test_roll_exploding_zero_cap_still_rolls_once() {
        let mut rng = SequenceRng::new(vec![10, 10]);

        let outcome = roll_exploding(&mut rng, 10, 0);

        assert_eq!(outcome.rolls, vec![10]);
        assert_eq!(outcome.explosions, 1);
        assert_eq!(outcome.total, 10);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_roll_exploding_one_sided_die_explodes_to_the_cap() {
        let outcome = roll_exploding(&mut MockRng, 1, 50);

        assert_eq!(outcome.explosions, 50);
        assert_eq!(outcome.rolls.len(), 50);
        assert_eq!(outcome.total, 50);
    }

    #[test]
    fn test_roll_exploding_one_sided_die_zero_cap() {
        let outcome = roll_exploding(&mut MockRng, 1, 0);

        assert_eq!(outcome.rolls, vec![1]);
        assert_eq!(outcome.explosions, 1);
        assert_eq!(outcome.total, 1);
    }

    #[test]
    fn test_roll_exploding_total_does_not_overflow_on_huge_die() {
        let mut rng = SequenceRng::new(vec![u32::MAX, u32::MAX]);

        let outcome = roll_exploding(&mut rng, u32::MAX, 2);

        assert_eq!(outcome.explosions, 2);
        assert_eq!(outcome.total, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_roll_exploding_bounds_hold_for_random_rolls() {
        let mut rng = SeededRng::from_seed(1_234);

        for sides in 2..=12_u32 {
            for max_explosions in 0..=4_u32 {
                for _ in 0..200 {
                    let outcome = roll_exploding(&mut rng, sides, max_explosions);
                    let explosions = u64::from(outcome.explosions);
                    let sides_wide = u64::from(sides);
                    let stopped_low = outcome.rolls.last().is_some_and(|&r| r < sides);

                    assert!(outcome.rolls.len() <= max_explosions.max(1) as usize);
                    assert_eq!(
                        outcome.explosions as usize,
                        outcome.rolls.len() - usize::from(stopped_low)
                    );
                    assert_eq!(
                        outcome.total,
                        outcome.rolls.iter().map(|&r| u64::from(r)).sum::<u64>()
                    );
                    assert!(explosions * sides_wide <= outcome.total);
                    assert!(outcome.total <= (explosions + 1) * sides_wide);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "a die needs at least one side")]
    fn test_roll_exploding_zero_sides_panics() {
        roll_exploding(&mut MockRng, 0, 3);
    }

    // --- Die ---

    #[test]
    fn test_plain_die_rolls_once() {
        let die = Die::plain(6);
        let mut rng = SequenceRng::new(vec![6, 6]);

        let outcome = die.roll(&mut rng);

        assert_eq!(die.kind(), DieKind::Plain);
        assert_eq!(die.sides(), 6);
        assert_eq!(outcome, RollOutcome::single(6));
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_exploding_die_delegates_to_chain() {
        let die = Die::exploding(4, 3);
        let mut rng = SequenceRng::new(vec![4, 4, 1]);

        let outcome = die.roll(&mut rng);

        assert_eq!(die.kind(), DieKind::Exploding { max_explosions: 3 });
        assert_eq!(outcome.total, 9);
        assert_eq!(outcome.explosions, 2);
    }

    #[test]
    #[should_panic(expected = "a die needs at least one side")]
    fn test_die_with_zero_sides_panics() {
        let _ = Die::exploding(0, 1);
    }
}
