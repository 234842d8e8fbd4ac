//! Scripted `DeterministicRng` implementations for tests.

use arena_core::rng::DeterministicRng;

/// Always returns `min` from `next_u32_range`.
///
/// Every die it drives lands on 1, and both initiative rolls always tie, so
/// only use it where no initiative is rolled.
#[derive(Debug, Default)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that replays a predetermined sequence of values, ignoring the
/// requested range. Used to script exact dice outcomes: initiative pairs,
/// attack and defense rolls, explosion chains.
///
/// # Panics
///
/// `next_u32_range` panics once the sequence is exhausted, which surfaces a
/// test that rolled more dice than it scripted.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Number of scripted values not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let Some(&val) = self.values.get(self.index) else {
            panic!("SequenceRng exhausted after {} values", self.values.len());
        };
        self.index += 1;
        val
    }
}
