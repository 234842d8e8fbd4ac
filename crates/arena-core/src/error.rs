//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A capped battle ran out of rounds before either side fell.
    #[error("no winner after {rounds} rounds")]
    NoWinner {
        /// The number of rounds that were fought.
        rounds: u32,
    },

    /// An infrastructure error (e.g. a poisoned lock around the RNG).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
