//! ListingConfig: page size defaults for listings.

use serde::{Deserialize, Serialize};

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Page size when none is requested
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Largest page size a caller may request
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl ListingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == 0 || self.max_limit == 0 {
            return Err("listing limits must be at least 1".to_string());
        }
        if self.default_limit > self.max_limit {
            return Err(format!(
                "listing.default_limit ({}) exceeds listing.max_limit ({})",
                self.default_limit, self.max_limit
            ));
        }
        Ok(())
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}
