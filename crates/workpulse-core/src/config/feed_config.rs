//! News feed configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::types::SortOrder;

/// Configuration for the news feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedConfig {
    /// Cards revealed per "load more" step. Default: 6.
    pub page_size: Option<usize>,
    /// Initial sort order. Default: newest.
    pub default_sort: Option<SortOrder>,
}

impl FeedConfig {
    /// Returns the effective page size, defaulting to 6.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Returns the effective initial sort order.
    pub fn effective_default_sort(&self) -> SortOrder {
        self.default_sort.unwrap_or_default()
    }
}
