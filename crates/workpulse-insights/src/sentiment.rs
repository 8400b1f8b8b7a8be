//! Sentiment vs reality: perceived sentiment change against reported growth.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use workpulse_core::types::Company;

static PCT_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"-?\d+(\.\d+)?").ok());

const DEFAULT_SENTIMENT: f64 = 60.0;
const DEFAULT_HEADCOUNT_K: f64 = 100.0;
const MIN_BUBBLE: f64 = 50.0;

/// First signed decimal number in `raw`, e.g. `"↑ 6%"` gives `6.0`.
pub fn parse_pct(raw: &str) -> Option<f64> {
    let pattern = PCT_PATTERN.as_ref()?;
    pattern
        .find(raw)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Where a company falls relative to the zero lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Sentiment up, growth up.
    UnderHypedWinner,
    /// Sentiment down, growth up.
    Underrated,
    /// Sentiment up, growth down.
    OverHyped,
    /// Sentiment down, growth down.
    Cooling,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPoint {
    pub company_key: String,
    pub company: String,
    pub color: String,
    /// Last minus first sentiment trend value, in points.
    pub sentiment_change: f64,
    /// Parsed growth figure; `None` when the growth text has no number.
    pub growth: Option<f64>,
    /// Bubble size: headcount in thousands, at least 50.
    pub size: f64,
}

impl SentimentPoint {
    pub fn from_company(company: &Company) -> Self {
        let first = company
            .sentiment_trend
            .first()
            .map_or(DEFAULT_SENTIMENT, |p| p.value);
        let last = company
            .sentiment_trend
            .last()
            .map_or(DEFAULT_SENTIMENT, |p| p.value);
        let headcount = company
            .headcount_k
            .filter(|h| h.is_finite() && *h != 0.0)
            .unwrap_or(DEFAULT_HEADCOUNT_K);

        Self {
            company_key: company.key.clone(),
            company: company.name.clone(),
            color: company.color.clone(),
            sentiment_change: last - first,
            growth: parse_pct(&company.growth),
            size: headcount.max(MIN_BUBBLE),
        }
    }

    /// Quadrant for plotted points; `None` without a growth figure.
    /// Zero counts as positive.
    pub fn quadrant(&self) -> Option<Quadrant> {
        let growth = self.growth?;
        Some(match (self.sentiment_change >= 0.0, growth >= 0.0) {
            (true, true) => Quadrant::UnderHypedWinner,
            (false, true) => Quadrant::Underrated,
            (true, false) => Quadrant::OverHyped,
            (false, false) => Quadrant::Cooling,
        })
    }
}

/// One point per company, in collection order.
pub fn sentiment_vs_reality(companies: &[Company]) -> Vec<SentimentPoint> {
    let points: Vec<SentimentPoint> = companies.iter().map(SentimentPoint::from_company).collect();
    let unplotted = points.iter().filter(|p| p.growth.is_none()).count();
    if unplotted > 0 {
        tracing::debug!(unplotted, "companies without a parseable growth figure");
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pct_finds_first_number() {
        assert_eq!(parse_pct("↑ 6%"), Some(6.0));
        assert_eq!(parse_pct("-2.5% YoY"), Some(-2.5));
        assert_eq!(parse_pct("up 3.75 then 9"), Some(3.75));
        assert_eq!(parse_pct("—"), None);
        assert_eq!(parse_pct(""), None);
    }
}
