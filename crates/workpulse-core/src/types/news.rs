use serde::{Deserialize, Serialize};

/// Feed ordering by publication time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    /// Parse `"newest"` / `"oldest"` (case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// Named entities mentioned by a news item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entities {
    pub orgs: Vec<String>,
    pub people: Vec<String>,
    pub events: Vec<String>,
}

impl Entities {
    /// All labels, organizations first, then people, then events.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.orgs
            .iter()
            .chain(self.people.iter())
            .chain(self.events.iter())
            .map(String::as_str)
    }
}

/// A single industry news item. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Raw timestamp as delivered by the feed. Parsed lazily, see [`crate::time`].
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub entities: Entities,
}

impl NewsItem {
    /// Epoch milliseconds used for ordering; 0 when the timestamp is unparseable.
    pub fn sort_key(&self) -> i64 {
        crate::time::sort_key_millis(&self.published_at)
    }

    /// Human-readable publication date, or the unknown-date marker.
    pub fn display_date(&self) -> String {
        crate::time::display_date(&self.published_at)
    }
}
