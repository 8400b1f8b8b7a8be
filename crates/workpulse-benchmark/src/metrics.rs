//! The company side of a benchmark: one value per metric key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use workpulse_core::types::BenchmarkPreset;

/// Company metric vector keyed by metric key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyMetrics {
    values: BTreeMap<String, f64>,
}

impl CompanyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a stored vector, e.g. the dataset's "Custom" entry.
    pub fn from_values(values: &BTreeMap<String, f64>) -> Self {
        Self {
            values: values.clone(),
        }
    }

    pub fn from_preset(preset: &BenchmarkPreset) -> Self {
        Self::from_values(&preset.values)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Set one metric, returning the updated vector.
    pub fn with_value(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Apply raw user input to one metric.
    ///
    /// Non-numeric input clears the value, so the metric renders as unknown
    /// and its delta and percentile fall back to 0.
    pub fn with_input(mut self, key: impl Into<String>, raw: &str) -> Self {
        let key = key.into();
        match parse_metric_input(raw) {
            Some(value) => {
                self.values.insert(key, value);
            }
            None => {
                self.values.remove(&key);
            }
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Parse a numeric metric entered as text. `None` unless finite.
pub fn parse_metric_input(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
