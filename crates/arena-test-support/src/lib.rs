//! Shared test mocks and utilities for the arena battle engine.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
