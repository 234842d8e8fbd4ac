//! Command abstractions.

use uuid::Uuid;

/// A request to the engine, carried with a correlation ID for logging.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable command name, e.g. `"combat.start_battle"`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the events it produces.
    fn correlation_id(&self) -> Uuid;
}
