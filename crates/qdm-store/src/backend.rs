//! Storage backends for the mapping store.
//!
//! The store persists one JSON blob under one fixed key. Backends only move
//! that blob; all normalization and record semantics live in the store.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, StoreError};

/// Fixed storage key for the persisted mapping list.
pub const STORAGE_KEY: &str = "mappings";

/// A single-slot string-blob store.
///
/// `read` returns `None` when nothing has been written yet; `write` replaces
/// the slot wholesale.
pub trait StorageBackend {
    /// Read the current blob, if any.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the blob.
    fn write(&self, blob: &str) -> Result<()>;
}

/// File-backed storage: one `mappings.json` file under a directory.
///
/// Writes go through a temp file and rename so a crash mid-write cannot leave
/// a truncated blob behind.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Io {
            operation: "create directory for",
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                operation: "read",
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn write(&self, blob: &str) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(blob.as_bytes()).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::Io {
            operation: "replace",
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }
}

/// In-memory storage slot, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl MemoryBackend {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a blob, e.g. a legacy persisted form.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(blob.into())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        Ok(slot.clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(blob.to_string());
        Ok(())
    }
}
