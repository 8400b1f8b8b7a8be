//! Monthly insight snapshot: one headline trend, one company to watch and
//! one activity anomaly, derived from the trend rows and company series.

use std::fmt;

use serde::Serialize;
use workpulse_core::types::{Company, SeriesPoint};

use crate::sentiment::SentimentPoint;
use crate::trend::TrendRow;

/// Latest-step sentiment moves smaller than this count as flat.
const FLAT_SENTIMENT_STEP: f64 = 0.5;

/// Company whose latest activity rose while its sentiment stayed flat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityAnomaly {
    pub company_key: String,
    /// Last minus previous news-velocity value.
    pub activity_step: f64,
    /// Last minus previous sentiment value.
    pub sentiment_step: f64,
}

impl fmt::Display for ActivityAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sentiment flat vs activity ↑", self.company_key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightSnapshot {
    /// Highest-scoring topic; the first one wins ties.
    pub top_trend: Option<String>,
    /// Company with the largest sentiment gain over its trend window.
    pub company_to_watch: Option<String>,
    pub anomaly: Option<ActivityAnomaly>,
}

impl InsightSnapshot {
    pub fn build(companies: &[Company], trends: &[TrendRow]) -> Self {
        let snapshot = Self {
            top_trend: top_trend(trends).map(|r| r.topic.clone()),
            company_to_watch: company_to_watch(companies).map(|c| c.name.clone()),
            anomaly: companies.iter().find_map(activity_anomaly),
        };
        tracing::debug!(
            top_trend = ?snapshot.top_trend,
            company_to_watch = ?snapshot.company_to_watch,
            anomaly = snapshot.anomaly.is_some(),
            "insight snapshot built"
        );
        snapshot
    }

    /// Report lines in display order; missing parts read "n/a".
    pub fn lines(&self) -> [String; 3] {
        let or_na = |v: Option<String>| v.unwrap_or_else(|| "n/a".to_string());
        [
            format!("Top trend: {}", or_na(self.top_trend.clone())),
            format!("Company to watch: {}", or_na(self.company_to_watch.clone())),
            format!(
                "Interesting anomaly: {}",
                or_na(self.anomaly.as_ref().map(ToString::to_string))
            ),
        ]
    }
}

fn top_trend(trends: &[TrendRow]) -> Option<&TrendRow> {
    trends.iter().fold(None, |best: Option<&TrendRow>, row| match best {
        Some(b) if b.score >= row.score => Some(b),
        _ => Some(row),
    })
}

fn company_to_watch(companies: &[Company]) -> Option<&Company> {
    companies
        .iter()
        .map(|c| (c, SentimentPoint::from_company(c).sentiment_change))
        .fold(None, |best: Option<(&Company, f64)>, (c, change)| match best {
            Some((b, best_change)) if best_change >= change => Some((b, best_change)),
            _ => Some((c, change)),
        })
        .map(|(c, _)| c)
}

fn last_step(series: &[SeriesPoint]) -> Option<f64> {
    match series {
        [.., prev, last] => Some(last.value - prev.value),
        _ => None,
    }
}

fn activity_anomaly(company: &Company) -> Option<ActivityAnomaly> {
    let activity_step = last_step(&company.news_velocity)?;
    let sentiment_step = last_step(&company.sentiment_trend)?;
    (activity_step > 0.0 && sentiment_step.abs() < FLAT_SENTIMENT_STEP).then(|| ActivityAnomaly {
        company_key: company.key.clone(),
        activity_step,
        sentiment_step,
    })
}
