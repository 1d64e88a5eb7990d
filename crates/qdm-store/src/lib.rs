//! Persisted mapping store for Quick Data Mapper.
//!
//! Named mapping configurations are kept as one JSON array blob under a
//! single storage slot. The store normalizes entries on every read (fresh ids
//! and default names for legacy entries, backfilled timestamps) and writes
//! the repaired form back, so callers always see well-formed records.
//!
//! Storage is abstracted behind [`StorageBackend`]; [`FileBackend`] persists
//! to disk with atomic replace, [`MemoryBackend`] backs tests and ephemeral
//! sessions.

mod backend;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, STORAGE_KEY, StorageBackend};
pub use error::{Result, StoreError};
pub use store::MappingStore;
