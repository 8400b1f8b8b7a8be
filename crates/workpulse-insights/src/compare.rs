//! Multi-company comparison selection.

use workpulse_core::config::CompareConfig;
use workpulse_core::constants::{DEFAULT_COMPARE_SEED, DEFAULT_MAX_COMPARED};
use workpulse_core::types::Company;

/// Companies picked for side-by-side comparison, capped at `max_selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareSelection {
    selected: Vec<String>,
    max_selected: usize,
}

impl CompareSelection {
    /// Pre-select the first three companies, cap at five.
    pub fn new(companies: &[Company]) -> Self {
        Self::seeded(companies, DEFAULT_COMPARE_SEED, DEFAULT_MAX_COMPARED)
    }

    pub fn from_config(companies: &[Company], config: &CompareConfig) -> Self {
        Self::seeded(
            companies,
            config.effective_seed_count(),
            config.effective_max_selected(),
        )
    }

    fn seeded(companies: &[Company], seed_count: usize, max_selected: usize) -> Self {
        let max_selected = max_selected.max(1);
        Self {
            selected: companies
                .iter()
                .take(seed_count.min(max_selected))
                .map(|c| c.key.clone())
                .collect(),
            max_selected,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.selected.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.selected
    }

    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.max_selected
    }

    /// Remove `key` if selected; otherwise add it unless the cap is reached.
    pub fn toggle(&self, key: &str) -> Self {
        let mut next = self.clone();
        if self.contains(key) {
            next.selected.retain(|k| k != key);
        } else if !self.is_full() {
            next.selected.push(key.to_string());
        } else {
            tracing::debug!(key, cap = self.max_selected, "comparison full, toggle ignored");
        }
        next
    }

    /// Selected companies in collection order.
    pub fn rows<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        companies.iter().filter(|c| self.contains(&c.key)).collect()
    }
}
