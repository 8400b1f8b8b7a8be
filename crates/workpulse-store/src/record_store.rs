//! RecordStore: the read-only collections every query runs against.

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashSet;
use workpulse_core::config::StoreConfig;
use workpulse_core::constants::NEWS_SOURCES;
use workpulse_core::errors::StoreError;
use workpulse_core::types::{
    BenchmarkMetric, BenchmarkPreset, Company, GeoActivity, IndustryBaseline, Kpi,
    MonthlySentiment, NewsItem, TalentMove, TimelineEvent, TrendTopic,
};

use crate::dataset::{self, parse_document, SeedDocuments};

/// Static, immutable dashboard data. Nothing in the workspace mutates it
/// after construction.
#[derive(Debug, Clone)]
pub struct RecordStore {
    docs: SeedDocuments,
}

impl RecordStore {
    /// Build a store from the datasets embedded in the crate.
    pub fn seeded() -> Result<Self, StoreError> {
        let docs = SeedDocuments {
            news: parse_document(dataset::NEWS_FILE, dataset::EMBEDDED_NEWS)?,
            companies: parse_document(dataset::COMPANIES_FILE, dataset::EMBEDDED_COMPANIES)?,
            benchmarks: parse_document(dataset::BENCHMARKS_FILE, dataset::EMBEDDED_BENCHMARKS)?,
            overview: parse_document(dataset::OVERVIEW_FILE, dataset::EMBEDDED_OVERVIEW)?,
            insights: parse_document(dataset::INSIGHTS_FILE, dataset::EMBEDDED_INSIGHTS)?,
        };
        Self::from_documents(docs)
    }

    /// Build a store from a directory holding the five dataset files.
    pub fn load_dir(dir: &Path) -> Result<Self, StoreError> {
        let docs = SeedDocuments {
            news: read_document(dir, dataset::NEWS_FILE)?,
            companies: read_document(dir, dataset::COMPANIES_FILE)?,
            benchmarks: read_document(dir, dataset::BENCHMARKS_FILE)?,
            overview: read_document(dir, dataset::OVERVIEW_FILE)?,
            insights: read_document(dir, dataset::INSIGHTS_FILE)?,
        };
        Self::from_documents(docs)
    }

    /// Use the configured dataset directory if any, else the embedded seed.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        match config.dataset_dir.as_deref() {
            Some(dir) => Self::load_dir(Path::new(dir)),
            None => Self::seeded(),
        }
    }

    /// Validate and wrap already-parsed documents.
    pub fn from_documents(docs: SeedDocuments) -> Result<Self, StoreError> {
        Self::validate(&docs)?;
        tracing::info!(
            news = docs.news.len(),
            companies = docs.companies.len(),
            metrics = docs.benchmarks.metrics.len(),
            industries = docs.benchmarks.baselines.len(),
            "record store loaded"
        );
        Ok(Self { docs })
    }

    /// Reject duplicate identifiers; warn about sources outside the known set.
    pub fn validate(docs: &SeedDocuments) -> Result<(), StoreError> {
        ensure_unique("news", docs.news.iter().map(|n| n.id.as_str()))?;
        ensure_unique("company", docs.companies.iter().map(|c| c.key.as_str()))?;
        ensure_unique(
            "metric",
            docs.benchmarks.metrics.iter().map(|m| m.key.as_str()),
        )?;
        ensure_unique(
            "industry",
            docs.benchmarks.baselines.iter().map(|b| b.name.as_str()),
        )?;
        ensure_unique(
            "preset",
            docs.benchmarks.presets.iter().map(|p| p.name.as_str()),
        )?;

        for item in &docs.news {
            if !NEWS_SOURCES.contains(&item.source.as_str()) {
                tracing::warn!(id = %item.id, source = %item.source, "news item from unknown source");
            }
        }
        Ok(())
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.docs.news
    }

    pub fn companies(&self) -> &[Company] {
        &self.docs.companies
    }

    /// Look a company up by its key.
    pub fn company(&self, key: &str) -> Option<&Company> {
        self.docs.companies.iter().find(|c| c.key == key)
    }

    pub fn metrics(&self) -> &[BenchmarkMetric] {
        &self.docs.benchmarks.metrics
    }

    pub fn baselines(&self) -> &[IndustryBaseline] {
        &self.docs.benchmarks.baselines
    }

    /// Look an industry baseline up by name.
    pub fn baseline(&self, industry: &str) -> Option<&IndustryBaseline> {
        self.docs
            .benchmarks
            .baselines
            .iter()
            .find(|b| b.name == industry)
    }

    /// Industry names in dataset order.
    pub fn industry_names(&self) -> Vec<&str> {
        self.docs
            .benchmarks
            .baselines
            .iter()
            .map(|b| b.name.as_str())
            .collect()
    }

    /// Starting values of the "Custom" benchmark entry, by metric key.
    pub fn custom_start(&self) -> &BTreeMap<String, f64> {
        &self.docs.benchmarks.custom_start
    }

    pub fn presets(&self) -> &[BenchmarkPreset] {
        &self.docs.benchmarks.presets
    }

    pub fn preset(&self, name: &str) -> Option<&BenchmarkPreset> {
        self.docs.benchmarks.presets.iter().find(|p| p.name == name)
    }

    pub fn kpis(&self) -> &[Kpi] {
        &self.docs.overview.kpis
    }

    pub fn monthly_sentiment(&self) -> &[MonthlySentiment] {
        &self.docs.overview.monthly_sentiment
    }

    pub fn talent_moves(&self) -> &[TalentMove] {
        &self.docs.insights.talent_moves
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.docs.insights.timeline
    }

    pub fn trend_topics(&self) -> &[TrendTopic] {
        &self.docs.insights.trend_topics
    }

    pub fn geo_activity(&self) -> &[GeoActivity] {
        &self.docs.insights.geo_activity
    }
}

fn read_document<T: serde::de::DeserializeOwned>(dir: &Path, name: &str) -> Result<T, StoreError> {
    let path = dir.join(name);
    let text = std::fs::read_to_string(&path).map_err(|e| StoreError::Unreadable {
        name: name.to_string(),
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_document(name, &text)
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = FxHashSet::default();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateRecord {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
