//! Error handling for Workpulse.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Data anomalies (bad dates, zero denominators, malformed persisted state)
//! never surface here; they degrade to defined defaults at the call site.

pub mod benchmark_error;
pub mod config_error;
pub mod error_code;
pub mod peer_error;
pub mod storage_error;
pub mod store_error;

pub use benchmark_error::BenchmarkError;
pub use config_error::ConfigError;
pub use error_code::WorkpulseErrorCode;
pub use peer_error::PeerError;
pub use storage_error::StorageError;
pub use store_error::StoreError;
