//! Company comparison configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COMPARE_SEED, DEFAULT_MAX_COMPARED};

/// Configuration for side-by-side company comparison.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompareConfig {
    /// Maximum companies compared at once. Default: 5.
    pub max_selected: Option<usize>,
    /// Companies pre-selected on startup. Default: 3.
    pub seed_count: Option<usize>,
}

impl CompareConfig {
    pub fn effective_max_selected(&self) -> usize {
        self.max_selected.unwrap_or(DEFAULT_MAX_COMPARED)
    }

    /// Pre-selection count, never above the cap.
    pub fn effective_seed_count(&self) -> usize {
        self.seed_count
            .unwrap_or(DEFAULT_COMPARE_SEED)
            .min(self.effective_max_selected())
    }
}
