//! Tooling Layer
//!
//! Command-line surface over the booking store.

pub mod cli;

pub use cli::{BookingCommands, Cli, CliContext, Commands, ConfigCommands};
