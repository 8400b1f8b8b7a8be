//! Peer ranking errors.

use super::error_code::{self, WorkpulseErrorCode};

/// Errors that can occur when ranking peers.
#[derive(Debug, thiserror::Error)]
pub enum PeerError {
    #[error("Unknown company key: {0}")]
    UnknownCompany(String),
}

impl WorkpulseErrorCode for PeerError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_COMPANY
    }
}
