//! Single-writer serialization for backing files
//!
//! Every mutating store operation holds the writer gate for its backing path for
//! the whole read-modify-write cycle. Gates are shared per path, so two stores
//! opened on the same file serialize against each other while stores on
//! different files never contend. Readers never take a gate.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;

/// Async mutex guarding one backing file.
pub type WriterGate = Arc<Mutex<()>>;

/// Per-path gate registry
pub struct WriterGates {
    /// Map from normalized backing path to its gate
    gates: RwLock<HashMap<PathBuf, WriterGate>>,
}

impl WriterGates {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            gates: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide registry used by every `ListStore`
    pub fn global() -> &'static WriterGates {
        static GLOBAL: OnceLock<WriterGates> = OnceLock::new();
        GLOBAL.get_or_init(WriterGates::new)
    }

    /// Get or create the gate for a backing path
    pub fn gate_for(&self, path: &Path) -> WriterGate {
        let key = normalize(path);
        {
            let map = self.gates.read();
            if let Some(gate) = map.get(&key) {
                return gate.clone();
            }
        }

        let mut map = self.gates.write();
        // Another caller may have inserted between the two locks
        map.entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Number of distinct paths with a gate
    pub fn len(&self) -> usize {
        self.gates.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WriterGates {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a path to a stable registry key.
///
/// The file and any number of its parent directories may not exist yet. The
/// nearest existing ancestor is canonicalized and the remaining components are
/// appended with `.` and `..` resolved lexically, so every spelling of one file
/// maps to the same key before and after its directories are created.
fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let components: Vec<Component> = absolute.components().collect();
    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if let Ok(base) = prefix.canonicalize() {
            return append_lexically(base, &components[split..]);
        }
    }
    append_lexically(PathBuf::new(), &components)
}

fn append_lexically(mut base: PathBuf, rest: &[Component]) -> PathBuf {
    for component in rest {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                base.pop();
            }
            other => base.push(other.as_os_str()),
        }
    }
    base
}
