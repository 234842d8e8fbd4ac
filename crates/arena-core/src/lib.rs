//! Arena Core — shared domain abstractions.
//!
//! Traits and types the combat context builds on: injected randomness and
//! time, command and event envelopes, errors, and configuration. Nothing in
//! here performs I/O beyond reading environment variables on request.

pub mod clock;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod rng;
