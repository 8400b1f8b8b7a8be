//! Record store errors.

use super::error_code::{self, WorkpulseErrorCode};

/// Errors raised while loading or validating seed datasets.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Dataset {name} could not be read from {path}: {message}")]
    Unreadable {
        name: String,
        path: String,
        message: String,
    },

    #[error("Dataset {name} is not valid JSON: {message}")]
    InvalidJson { name: String, message: String },

    #[error("Duplicate {kind} identifier: {id}")]
    DuplicateRecord { kind: &'static str, id: String },
}

impl WorkpulseErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } | Self::InvalidJson { .. } => error_code::DATASET_ERROR,
            Self::DuplicateRecord { .. } => error_code::DUPLICATE_RECORD,
        }
    }
}
