//! Integration tests for the booking list store, configuration and CLI

mod cli_commands;
mod config_precedence;
mod store_persistence;
mod support;
