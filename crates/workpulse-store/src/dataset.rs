//! Seed dataset documents and their on-disk names.
//!
//! Each JSON document holds one slice of the dashboard's static input. The
//! embedded copies ship with the crate; a directory with the same file names
//! can replace them.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use workpulse_core::errors::StoreError;
use workpulse_core::types::{
    BenchmarkMetric, BenchmarkPreset, Company, GeoActivity, IndustryBaseline, Kpi,
    MonthlySentiment, NewsItem, TalentMove, TimelineEvent, TrendTopic,
};

pub const NEWS_FILE: &str = "news.json";
pub const COMPANIES_FILE: &str = "companies.json";
pub const BENCHMARKS_FILE: &str = "benchmarks.json";
pub const OVERVIEW_FILE: &str = "overview.json";
pub const INSIGHTS_FILE: &str = "insights.json";

pub(crate) const EMBEDDED_NEWS: &str = include_str!("../data/news.json");
pub(crate) const EMBEDDED_COMPANIES: &str = include_str!("../data/companies.json");
pub(crate) const EMBEDDED_BENCHMARKS: &str = include_str!("../data/benchmarks.json");
pub(crate) const EMBEDDED_OVERVIEW: &str = include_str!("../data/overview.json");
pub(crate) const EMBEDDED_INSIGHTS: &str = include_str!("../data/insights.json");

/// Benchmark catalog: metric ranges, industry baselines and company presets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BenchmarkDataset {
    pub metrics: Vec<BenchmarkMetric>,
    pub baselines: Vec<IndustryBaseline>,
    pub presets: Vec<BenchmarkPreset>,
    /// Editable "Custom" vector shown before any preset is chosen.
    pub custom_start: BTreeMap<String, f64>,
}

/// Headline KPIs and aggregate monthly sentiment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverviewDataset {
    pub kpis: Vec<Kpi>,
    pub monthly_sentiment: Vec<MonthlySentiment>,
}

/// Inputs for the insight views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsightsDataset {
    pub talent_moves: Vec<TalentMove>,
    pub timeline: Vec<TimelineEvent>,
    pub trend_topics: Vec<TrendTopic>,
    pub geo_activity: Vec<GeoActivity>,
}

/// Every dataset document, parsed.
#[derive(Debug, Clone, Default)]
pub struct SeedDocuments {
    pub news: Vec<NewsItem>,
    pub companies: Vec<Company>,
    pub benchmarks: BenchmarkDataset,
    pub overview: OverviewDataset,
    pub insights: InsightsDataset,
}

/// Parse one named JSON document.
pub fn parse_document<T: DeserializeOwned>(name: &str, text: &str) -> Result<T, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::InvalidJson {
        name: name.to_string(),
        message: e.to_string(),
    })
}
