//! Engine configuration.
//!
//! The die size is read from the environment by whoever hosts the engine;
//! the engine itself only ever sees the validated `ArenaConfig`.

use crate::error::DomainError;

/// Die size used when `DICE_SIDES` is not set.
pub const DEFAULT_DICE_SIDES: u32 = 6;

/// Environment variable holding the combat die size.
pub const DICE_SIDES_VAR: &str = "DICE_SIDES";

/// Environment variable holding the optional battle round cap.
pub const ROUND_LIMIT_VAR: &str = "BATTLE_ROUND_LIMIT";

/// Validated battle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Faces on the combat die. Always at least 1.
    pub dice_sides: u32,
    /// Rounds after which a battle is abandoned. `None` fights to the end.
    pub round_limit: Option<u32>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            dice_sides: DEFAULT_DICE_SIDES,
            round_limit: None,
        }
    }
}

impl ArenaConfig {
    /// Builds a configuration with the given die size and no round cap.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if `dice_sides` is zero.
    pub fn new(dice_sides: u32) -> Result<Self, DomainError> {
        if dice_sides < 1 {
            return Err(DomainError::Configuration(
                "dice sides must be at least 1".to_owned(),
            ));
        }
        Ok(Self {
            dice_sides,
            round_limit: None,
        })
    }

    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if a variable is set to an
    /// invalid value.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if `DICE_SIDES` is not a positive
    /// integer or `BATTLE_ROUND_LIMIT` is not an integer of at least 1.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dice_sides = match lookup(DICE_SIDES_VAR) {
            Some(raw) => parse_positive(DICE_SIDES_VAR, &raw)?,
            None => DEFAULT_DICE_SIDES,
        };
        let round_limit = lookup(ROUND_LIMIT_VAR)
            .map(|raw| parse_positive(ROUND_LIMIT_VAR, &raw))
            .transpose()?;

        Ok(Self {
            dice_sides,
            round_limit,
        })
    }

    /// Sets the round cap.
    #[must_use]
    pub fn with_round_limit(mut self, round_limit: u32) -> Self {
        self.round_limit = Some(round_limit);
        self
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u32, DomainError> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|e| DomainError::Configuration(format!("{key} must be an integer: {e}")))?;
    if value == 0 {
        return Err(DomainError::Configuration(format!(
            "{key} must be at least 1"
        )));
    }
    Ok(value)
}
