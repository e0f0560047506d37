//! Merge policy: built-in defaults every layered load starts from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults for keys that other layers commonly override.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("storage.bookings_file", "bookings.json")?
        .set_default("listing.default_limit", 10)?
        .set_default("listing.max_limit", 100)
}
