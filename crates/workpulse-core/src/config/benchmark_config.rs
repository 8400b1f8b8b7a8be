//! Benchmark configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INDUSTRY;

/// Configuration for industry benchmarking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Industry baseline selected on startup. Default: "Consulting & Advisory".
    pub default_industry: Option<String>,
}

impl BenchmarkConfig {
    pub fn effective_default_industry(&self) -> &str {
        self.default_industry.as_deref().unwrap_or(DEFAULT_INDUSTRY)
    }
}
