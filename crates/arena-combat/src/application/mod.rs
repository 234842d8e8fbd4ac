//! Application layer for the combat context.

pub mod command_handlers;
