//! Wayfare: Durable Booking Lists
//!
//! A file-backed list store for booking records. Each list lives in a single
//! JSON file; mutations are serialized per file and replace it atomically.

pub mod booking;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod types;
