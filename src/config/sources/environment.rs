//! Environment variable source: WAYFARE__* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "WAYFARE";

/// Add environment variable overlay to builder.
/// `WAYFARE__LISTING__DEFAULT_LIMIT=25` sets `listing.default_limit`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
