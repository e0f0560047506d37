//! List Store
//!
//! A durable list of homogeneous records held in a single JSON document.
//! Every mutation is a full read-modify-write of that document, serialized
//! per backing path through a writer gate. Reads never take the gate; the
//! backend replaces the document atomically so readers see whole snapshots.

pub mod backend;
pub mod clock;
pub mod contract;
pub mod ids;
pub mod manifest;
pub mod query;
pub mod record;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{Backend, FsBackend, MemoryBackend};
pub use clock::{Clock, ManualClock, SystemClock};
pub use contract::{Domain, Lifecycle, StatusPhase};
pub use manifest::{StoreManifest, SCHEMA_VERSION};
pub use query::{ListQuery, Page, StatusFilter};
pub use record::{Record, Update};
pub use stats::Stats;

use crate::concurrency::{WriterGate, WriterGates};
use crate::error::StoreError;
use crate::types::Timestamp;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// File-backed list store for one domain.
pub struct ListStore<D: Domain> {
    path: PathBuf,
    manifest_path: PathBuf,
    backend: Arc<dyn Backend>,
    clock: Arc<dyn Clock>,
    gate: WriterGate,
    _domain: PhantomData<fn() -> D>,
}

impl<D: Domain> Clone for ListStore<D> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            manifest_path: self.manifest_path.clone(),
            backend: self.backend.clone(),
            clock: self.clock.clone(),
            gate: self.gate.clone(),
            _domain: PhantomData,
        }
    }
}

impl<D: Domain> ListStore<D> {
    /// Open a store on the local filesystem. Nothing is touched on disk until
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_parts(path, Arc::new(FsBackend::new()), Arc::new(SystemClock))
    }

    /// Open a store with an explicit backend and clock.
    pub fn with_parts(
        path: impl Into<PathBuf>,
        backend: Arc<dyn Backend>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let path = path.into();
        let gate = WriterGates::global().gate_for(&path);
        Self {
            manifest_path: manifest::manifest_path_for(&path),
            path,
            backend,
            clock,
            gate,
            _domain: PhantomData,
        }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a new record built from caller-supplied fields.
    pub async fn create(&self, fields: D::Fields) -> Result<Record<D>, StoreError> {
        D::validate(&fields).map_err(StoreError::Invalid)?;

        let _guard = self.gate.lock().await;
        let mut records = self.load().await?;
        let mut manifest = self.load_manifest().await?;

        let ordinal = next_ordinal::<D>(&records, &manifest);
        let now = self.clock.now();
        let id = ids::generate_id(now, |candidate| records.iter().any(|r| r.id == candidate));
        let record = Record {
            id,
            sequence_code: ids::format_sequence(D::SEQUENCE_PREFIX, ordinal),
            status: D::Status::initial(),
            fields,
            created_at: now,
            updated_at: now,
        };
        records.push(record.clone());

        // Counter first: a crash before the records write leaves a gap, not a duplicate
        manifest.schema_version = SCHEMA_VERSION;
        manifest.last_sequence = ordinal;
        self.write_manifest(&manifest).await?;
        self.write_records(&records).await?;

        info!(
            collection = D::COLLECTION,
            id = %record.id,
            sequence_code = %record.sequence_code,
            total = records.len(),
            "Record created"
        );
        Ok(record)
    }

    /// Filtered, newest-first, paginated listing.
    pub async fn find_all(&self, query: &ListQuery<D::Status>) -> Result<Page<D>, StoreError> {
        let records = self.load().await?;
        let page = query::select(records, query);
        debug!(
            collection = D::COLLECTION,
            page = page.page,
            limit = page.limit,
            total = page.total,
            returned = page.records.len(),
            "Listed records"
        );
        Ok(page)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Record<D>>, StoreError> {
        let records = self.load().await?;
        let found = records.into_iter().find(|r| r.id == id);
        debug!(
            collection = D::COLLECTION,
            id,
            found = found.is_some(),
            "Looked up record"
        );
        Ok(found)
    }

    /// Merge a partial update into the record with `id`.
    ///
    /// Returns `Ok(None)` without writing when no such record exists.
    pub async fn update(&self, id: &str, update: Update<D>) -> Result<Option<Record<D>>, StoreError> {
        let _guard = self.gate.lock().await;
        let mut records = self.load().await?;

        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            warn!(collection = D::COLLECTION, id, "Update target not found");
            return Ok(None);
        };

        let mut fields = record.fields.clone();
        D::merge(&mut fields, update.changes);
        D::validate(&fields).map_err(StoreError::Invalid)?;

        let previous_status = record.status;
        record.fields = fields;
        if let Some(status) = update.status {
            record.status = status;
        }
        record.updated_at = self.stamp_after(record.created_at);
        let updated = record.clone();

        self.write_records(&records).await?;

        info!(
            collection = D::COLLECTION,
            id,
            sequence_code = %updated.sequence_code,
            from_status = previous_status.as_str(),
            to_status = updated.status.as_str(),
            "Record updated"
        );
        Ok(Some(updated))
    }

    /// Remove the record with `id`. Returns `false` without writing when absent.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.gate.lock().await;
        let mut records = self.load().await?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            warn!(collection = D::COLLECTION, id, "Delete target not found");
            return Ok(false);
        }

        self.write_records(&records).await?;
        info!(
            collection = D::COLLECTION,
            id,
            total = records.len(),
            "Record deleted"
        );
        Ok(true)
    }

    pub async fn count(&self, status: StatusFilter<D::Status>) -> Result<usize, StoreError> {
        let records = self.load().await?;
        let count = records.iter().filter(|r| status.matches(&r.status)).count();
        debug!(collection = D::COLLECTION, count, "Counted records");
        Ok(count)
    }

    pub async fn stats(&self) -> Result<Stats, StoreError> {
        let records = self.load().await?;
        let stats = Stats::from_records(&records);
        debug!(
            collection = D::COLLECTION,
            total = stats.total,
            confirmed = stats.confirmed,
            "Computed stats"
        );
        Ok(stats)
    }

    /// Load the full list. Absent or blank files are empty; anything else that
    /// does not parse is reported as corruption.
    async fn load(&self) -> Result<Vec<Record<D>>, StoreError> {
        let bytes = self
            .backend
            .read(&self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        let Some(bytes) = bytes else {
            return Ok(Vec::new());
        };
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| {
            error!(
                collection = D::COLLECTION,
                path = %self.path.display(),
                error = %source,
                "Store file is corrupt"
            );
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })
    }

    async fn load_manifest(&self) -> Result<StoreManifest, StoreError> {
        let bytes = self
            .backend
            .read(&self.manifest_path)
            .await
            .map_err(|e| StoreError::io(&self.manifest_path, e))?;
        match bytes {
            Some(bytes) => StoreManifest::decode(&self.manifest_path, &bytes),
            None => Ok(StoreManifest::default()),
        }
    }

    async fn write_records(&self, records: &[Record<D>]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        self.backend
            .write(&self.path, &bytes)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }

    async fn write_manifest(&self, manifest: &StoreManifest) -> Result<(), StoreError> {
        let bytes = manifest.encode()?;
        self.backend
            .write(&self.manifest_path, &bytes)
            .await
            .map_err(|e| StoreError::io(&self.manifest_path, e))
    }

    /// Current time, never earlier than `created_at`.
    fn stamp_after(&self, created_at: Timestamp) -> Timestamp {
        let now = self.clock.now();
        if now < created_at {
            warn!(
                collection = D::COLLECTION,
                created_at = %created_at,
                now = %now,
                "Clock is behind record creation time"
            );
            return created_at;
        }
        now
    }
}

/// Next sequence ordinal: one past the largest of the persisted counter, the
/// list length and any ordinal already present in the list.
fn next_ordinal<D: Domain>(records: &[Record<D>], manifest: &StoreManifest) -> u64 {
    let highest_code = records
        .iter()
        .filter_map(|r| ids::parse_sequence(D::SEQUENCE_PREFIX, &r.sequence_code))
        .max()
        .unwrap_or(0);
    manifest
        .last_sequence
        .max(records.len() as u64)
        .max(highest_code)
        + 1
}
