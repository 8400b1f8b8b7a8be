use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A benchmarkable metric and the range used to estimate percentiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetric {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub min: f64,
    pub max: f64,
}

/// Reference metric values for one industry grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryBaseline {
    pub name: String,
    pub values: BTreeMap<String, f64>,
}

impl IndustryBaseline {
    /// Baseline value for a metric key, if the industry has one.
    pub fn value(&self, metric_key: &str) -> Option<f64> {
        self.values.get(metric_key).copied()
    }
}

/// A named company metric vector selectable instead of custom input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkPreset {
    pub name: String,
    pub values: BTreeMap<String, f64>,
}

/// A headline KPI tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub name: String,
    pub value: f64,
    pub change: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// One month of aggregate industry sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySentiment {
    pub month: String,
    pub sentiment: f64,
}
