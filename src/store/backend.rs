//! Storage backends: the byte-level read/write collaborator of a list store.

pub mod contract;
pub mod fs;
pub mod memory;

pub use contract::Backend;
pub use fs::FsBackend;
pub use memory::MemoryBackend;
