//! Key-value persistence behind a swappable interface.
//!
//! Application state that outlives the process (currently the health
//! passport) is stored as string keys and values so the mechanism can be
//! replaced without touching domain logic. [`FileStore`] keeps the entries
//! in a single JSON file; [`MemoryStore`] holds them for the life of the
//! process.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;

/// Errors that can occur in the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error encoding or decoding stored JSON
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Alias for Result with `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// String key-value storage with immediate persistence.
///
/// `put` and `remove` persist before returning, so a crash never loses an
/// acknowledged update.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key is a
    /// no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}
