use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Statistics bucket a status belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusPhase {
    Pending,
    Confirmed,
    Cancelled,
}

/// Closed status enum of a domain.
///
/// The store enforces no transition graph: any status may follow any other.
pub trait Lifecycle:
    Copy + Eq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Status assigned at creation
    fn initial() -> Self;

    fn phase(&self) -> StatusPhase;

    /// Name as persisted
    fn as_str(&self) -> &'static str;
}

/// Describes one homogeneous record collection held by a `ListStore`.
pub trait Domain: Send + Sync + 'static {
    /// Caller-supplied fields, stored flattened next to the store-assigned ones
    type Fields: Serialize + DeserializeOwned + Clone + Debug + PartialEq + Send + Sync;

    /// Partial change set; `None` members leave the field untouched
    type Patch: Default + Debug + Send;

    type Status: Lifecycle;

    /// Collection name used in log events
    const COLLECTION: &'static str;

    /// Prefix of the human-readable sequence code
    const SEQUENCE_PREFIX: &'static str;

    /// Shallow-merge `patch` into `fields`.
    fn merge(fields: &mut Self::Fields, patch: Self::Patch);

    /// String fields matched by free-text search, in addition to the sequence code.
    fn search_fields(fields: &Self::Fields) -> Vec<&str>;

    /// Numeric value summed into revenue and averaged in statistics.
    fn amount(fields: &Self::Fields) -> f64;

    fn validate(_fields: &Self::Fields) -> Result<(), String> {
        Ok(())
    }
}
