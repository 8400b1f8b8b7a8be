//! WorkpulseErrorCode trait for host-facing error strings.

/// Trait for converting Workpulse errors to stable error codes.
/// Every error enum implements this so an embedding host can branch on a
/// code instead of parsing messages.
pub trait WorkpulseErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted host error string: `[ERROR_CODE] message`.
    fn host_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const DUPLICATE_RECORD: &str = "DUPLICATE_RECORD";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const UNKNOWN_COMPANY: &str = "UNKNOWN_COMPANY";
pub const UNKNOWN_INDUSTRY: &str = "UNKNOWN_INDUSTRY";
pub const UNKNOWN_PRESET: &str = "UNKNOWN_PRESET";
