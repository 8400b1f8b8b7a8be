//! Persisted key/value state.
//!
//! The dashboard persists exactly one value (the watchlist), but the backend
//! is keyed so a host can share one database between several values.

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStateBackend;
pub use sqlite::SqliteStateBackend;

use workpulse_core::errors::StorageError;

/// A string-keyed store of string values. Writes replace the whole value.
pub trait StateBackend: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
