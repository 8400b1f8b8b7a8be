//! Feature space: the ordered labels and size scaling used to vectorize companies.

use workpulse_core::config::PeersConfig;
use workpulse_core::constants::{DEFAULT_FEATURE_LABELS, DEFAULT_SIZE_FALLBACK, DEFAULT_SIZE_REFERENCE};
use workpulse_core::types::collections::SmallVec16;
use workpulse_core::types::Company;

/// A company's position in a [`FeatureSpace`]. Length is `labels + 1`.
pub type FeatureVector = SmallVec16<f64>;

/// Ordered category labels plus size scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSpace {
    labels: Vec<String>,
    size_reference: f64,
    default_size: f64,
}

impl Default for FeatureSpace {
    fn default() -> Self {
        Self {
            labels: DEFAULT_FEATURE_LABELS.iter().map(|s| s.to_string()).collect(),
            size_reference: DEFAULT_SIZE_REFERENCE,
            default_size: DEFAULT_SIZE_FALLBACK,
        }
    }
}

impl FeatureSpace {
    /// Build a space from explicit labels and sizes.
    ///
    /// Non-positive or non-finite sizes fall back to the defaults (500 and 100).
    pub fn new(labels: Vec<String>, size_reference: f64, default_size: f64) -> Self {
        Self {
            labels,
            size_reference: positive_or(size_reference, DEFAULT_SIZE_REFERENCE),
            default_size: positive_or(default_size, DEFAULT_SIZE_FALLBACK),
        }
    }

    pub fn from_config(config: &PeersConfig) -> Self {
        Self::new(
            config.effective_feature_labels(),
            config.effective_size_reference(),
            config.effective_default_size(),
        )
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Vector length: one entry per label plus the size entry.
    pub fn dimension(&self) -> usize {
        self.labels.len() + 1
    }

    /// Size entry: headcount (thousands) over the reference size.
    /// Missing, zero or non-finite headcounts use the default size.
    pub fn size_feature(&self, headcount_k: Option<f64>) -> f64 {
        let headcount = headcount_k
            .filter(|h| h.is_finite() && *h != 0.0)
            .unwrap_or(self.default_size);
        headcount / self.size_reference
    }

    /// Vectorize a company: `1.0` per label found in its tags, then size.
    pub fn vector(&self, company: &Company) -> FeatureVector {
        let mut v: FeatureVector = self
            .labels
            .iter()
            .map(|label| if company.has_tag(label) { 1.0 } else { 0.0 })
            .collect();
        v.push(self.size_feature(company.headcount_k));
        v
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}
