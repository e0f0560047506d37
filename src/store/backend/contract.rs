use async_trait::async_trait;
use std::path::Path;

/// Byte-oriented persistence for a single document.
///
/// `read` returns `Ok(None)` when nothing has been written at `path` yet.
/// `write` must create missing parent directories and replace the document
/// as a whole, so a concurrent `read` sees either the old or the new bytes.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn read(&self, path: &Path) -> std::io::Result<Option<Vec<u8>>>;
    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()>;
}
