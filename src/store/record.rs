use crate::store::contract::Domain;
use crate::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a list store.
///
/// `id`, `sequence_code`, `status` and both timestamps are assigned by the
/// store; the domain fields are flattened into the same JSON object.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(serialize = "", deserialize = ""))]
pub struct Record<D: Domain> {
    pub id: RecordId,
    pub sequence_code: String,
    pub status: D::Status,
    #[serde(flatten)]
    pub fields: D::Fields,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<D: Domain> Clone for Record<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            sequence_code: self.sequence_code.clone(),
            status: self.status,
            fields: self.fields.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl<D: Domain> fmt::Debug for Record<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("sequence_code", &self.sequence_code)
            .field("status", &self.status)
            .field("fields", &self.fields)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl<D: Domain> PartialEq for Record<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.sequence_code == other.sequence_code
            && self.status == other.status
            && self.fields == other.fields
            && self.created_at == other.created_at
            && self.updated_at == other.updated_at
    }
}

/// Partial update applied by `ListStore::update`.
pub struct Update<D: Domain> {
    pub status: Option<D::Status>,
    pub changes: D::Patch,
}

impl<D: Domain> Update<D> {
    pub fn new() -> Self {
        Self {
            status: None,
            changes: D::Patch::default(),
        }
    }

    /// Status-only update
    pub fn status(status: D::Status) -> Self {
        Self::new().with_status(status)
    }

    /// Field-only update
    pub fn changes(changes: D::Patch) -> Self {
        Self {
            status: None,
            changes,
        }
    }

    pub fn with_status(mut self, status: D::Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_changes(mut self, changes: D::Patch) -> Self {
        self.changes = changes;
        self
    }
}

impl<D: Domain> Default for Update<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Domain> fmt::Debug for Update<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Update")
            .field("status", &self.status)
            .field("changes", &self.changes)
            .finish()
    }
}
