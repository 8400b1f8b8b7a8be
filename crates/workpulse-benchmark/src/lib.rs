//! # workpulse-benchmark
//!
//! Compares a company's metric vector against an industry baseline.
//! The arithmetic is total: degenerate inputs map to defined values instead
//! of errors. Only lookups by industry or preset name can fail.

pub mod math;
pub mod metrics;
pub mod report;

pub use math::{clamp, est_percentile, pct_delta};
pub use metrics::{parse_metric_input, CompanyMetrics};
pub use report::{
    default_baseline, find_baseline, find_preset, BenchmarkReport, DeltaDirection, MetricComparison,
};
