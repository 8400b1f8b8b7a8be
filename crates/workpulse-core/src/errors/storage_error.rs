//! Persisted-state storage errors.

use super::error_code::{self, WorkpulseErrorCode};

/// Errors from the persisted-state backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("State encoding failed for key {key}: {message}")]
    EncodingFailed { key: String, message: String },

    #[error("State backend lock poisoned")]
    LockPoisoned,
}

impl WorkpulseErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
