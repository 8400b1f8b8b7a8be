use serde::{Deserialize, Serialize};

/// Where a data point or quote came from. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub site: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

/// One point of a company time series (news velocity, sentiment trend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub value: f64,
    #[serde(default)]
    pub source: Option<Attribution>,
}

/// A company leader. Owned by exactly one [`Company`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub source: Option<Attribution>,
}

/// A tracked company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub revenue: String,
    #[serde(default)]
    pub growth: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub sentiment_now: f64,
    #[serde(default)]
    pub news_velocity: Vec<SeriesPoint>,
    #[serde(default)]
    pub sentiment_trend: Vec<SeriesPoint>,
    #[serde(default)]
    pub leaders: Vec<Leader>,
    #[serde(default)]
    pub headcount_k: Option<f64>,
}

impl Company {
    /// Whether the company carries the given category tag (exact match).
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t == label)
    }
}
