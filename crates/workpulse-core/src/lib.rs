//! # workpulse-core
//!
//! Foundation crate for the Workpulse dashboard engine.
//! Defines record types, errors, config, events, tracing, and time helpers.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod time;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::WorkpulseConfig;
pub use errors::WorkpulseErrorCode;
pub use types::{
    Attribution, BenchmarkMetric, BenchmarkPreset, Company, Entities, IndustryBaseline, Leader,
    NewsItem, SeriesPoint, SortOrder,
};
