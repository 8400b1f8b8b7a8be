//! Benchmark lookup errors.

use super::error_code::{self, WorkpulseErrorCode};

/// Errors that can occur when resolving benchmark inputs.
///
/// The arithmetic itself is total; only lookups by name can fail.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("Unknown industry baseline: {0}")]
    UnknownIndustry(String),

    #[error("Unknown benchmark preset: {0}")]
    UnknownPreset(String),
}

impl WorkpulseErrorCode for BenchmarkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownIndustry(_) => error_code::UNKNOWN_INDUSTRY,
            Self::UnknownPreset(_) => error_code::UNKNOWN_PRESET,
        }
    }
}
