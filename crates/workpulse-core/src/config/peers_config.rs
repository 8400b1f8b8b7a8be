//! Peer similarity configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FEATURE_LABELS, DEFAULT_SIZE_FALLBACK, DEFAULT_SIZE_REFERENCE};

/// Configuration for the feature space used by peer ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PeersConfig {
    /// Ordered category labels. Empty means the built-in ten labels.
    pub feature_labels: Vec<String>,
    /// Headcount (thousands) that maps to a size feature of 1.0. Default: 500.
    pub size_reference: Option<f64>,
    /// Headcount (thousands) assumed when missing. Default: 100.
    pub default_size: Option<f64>,
}

impl PeersConfig {
    /// Returns the effective ordered label list.
    pub fn effective_feature_labels(&self) -> Vec<String> {
        if self.feature_labels.is_empty() {
            DEFAULT_FEATURE_LABELS.iter().map(|s| s.to_string()).collect()
        } else {
            self.feature_labels.clone()
        }
    }

    pub fn effective_size_reference(&self) -> f64 {
        self.size_reference.unwrap_or(DEFAULT_SIZE_REFERENCE)
    }

    pub fn effective_default_size(&self) -> f64 {
        self.default_size.unwrap_or(DEFAULT_SIZE_FALLBACK)
    }
}
