//! Persistence collaborator boundary.
//!
//! The store talks to a single flat key-value slot through the [`Storage`]
//! trait: one serialized payload in, one out. `FileStorage` backs the slot
//! with a JSON file on disk; `MemoryStorage` backs it with a `String` and
//! exists for tests.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single-slot persistence medium.
///
/// `read_all` returns the previously stored payload, or `None` if nothing
/// was ever stored or the medium is unavailable. `write_all` is best
/// effort; callers are expected to log failures and carry on.
pub trait Storage {
    fn read_all(&self) -> Option<String>;
    fn write_all(&mut self, payload: &str) -> Result<(), StorageError>;
}

/// JSON file on disk, written atomically via temp + rename.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }
}

impl Storage for FileStorage {
    fn read_all(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let mut buf = String::new();
        match File::open(&self.path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => Some(buf),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read task file");
                None
            }
        }
    }

    fn write_all(&mut self, payload: &str) -> Result<(), StorageError> {
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        f.write_all(payload.as_bytes())?;
        f.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Pre-seed the slot, as if a previous session had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        MemoryStorage { slot: Some(payload.into()) }
    }

    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

#[cfg(test)]
impl Storage for MemoryStorage {
    fn read_all(&self) -> Option<String> {
        self.slot.clone()
    }

    fn write_all(&mut self, payload: &str) -> Result<(), StorageError> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("tasks.json"));
        assert!(storage.read_all().is_none());

        storage.write_all("[{\"id\":\"a\"}]").unwrap();
        assert_eq!(storage.read_all().as_deref(), Some("[{\"id\":\"a\"}]"));

        // Overwrite replaces, never appends.
        storage.write_all("[]").unwrap();
        assert_eq!(storage.read_all().as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("tasks.json"));
        storage.write_all("[]").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
