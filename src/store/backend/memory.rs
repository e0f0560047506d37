use crate::store::backend::Backend;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory backend, mainly for tests.
///
/// Reads and writes can be switched to fail so callers can observe how I/O
/// errors propagate.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: Mutex<HashMap<PathBuf, Vec<u8>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document as if it had been written earlier.
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.documents.lock().insert(path.into(), bytes.into());
    }

    pub fn get(&self, path: &Path) -> Option<Vec<u8>> {
        self.documents.lock().get(path).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn read(&self, path: &Path) -> std::io::Result<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::new(
                ErrorKind::PermissionDenied,
                format!("reads disabled for {}", path.display()),
            ));
        }
        Ok(self.get(path))
    }

    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::new(
                ErrorKind::PermissionDenied,
                format!("writes disabled for {}", path.display()),
            ));
        }
        self.insert(path, bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
