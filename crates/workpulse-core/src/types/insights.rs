use serde::{Deserialize, Serialize};

use super::company::Attribution;

/// A leadership move at a tracked company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentMove {
    pub person: String,
    pub role: String,
    pub company: String,
    pub date: String,
    #[serde(default)]
    pub source: Option<Attribution>,
}

/// An event placed on one lane of the industry timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub lane: String,
    pub date: String,
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// A topic whose momentum is scored for trend prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendTopic {
    pub topic: String,
    #[serde(default)]
    pub drivers: Vec<String>,
    /// Baseline strength in [0, 1].
    pub base: f64,
}

/// Activity level for one country on the heat grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoActivity {
    pub country: String,
    pub value: f64,
}
