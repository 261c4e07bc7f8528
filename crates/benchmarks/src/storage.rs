//! Artifact storage capability.
//!
//! The orchestrator persists each encoding through a [`Storage`] it borrows
//! exclusively for the duration of a run. [`FsStorage`](crate::io::FsStorage)
//! writes real files; [`MemoryStorage`] keeps artifacts in a map.

use crate::error::StorageError;
use std::collections::BTreeMap;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Minimal read/write/size capability over named artifacts.
#[cfg_attr(test, mockall::automock)]
pub trait Storage {
    /// Write `bytes` under `name`, replacing any previous artifact.
    ///
    /// The artifact must be size-queryable as soon as this returns.
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()>;

    /// Byte size of the artifact stored under `name`.
    fn size(&self, name: &str) -> Result<u64>;

    /// Read back the artifact stored under `name`.
    fn read(&self, name: &str) -> Result<Vec<u8>>;
}

/// In-memory storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    artifacts: BTreeMap<String, Vec<u8>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of stored artifacts, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.keys().map(String::as_str)
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn write(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.artifacts.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }

    fn size(&self, name: &str) -> Result<u64> {
        self.artifacts
            .get(name)
            .map(|bytes| bytes.len() as u64)
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn read(&self, name: &str) -> Result<Vec<u8>> {
        self.artifacts
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }
}
