//! Per-metric comparison of a company against an industry baseline.

use std::fmt;

use serde::Serialize;
use workpulse_core::benchmark_span;
use workpulse_core::config::BenchmarkConfig;
use workpulse_core::errors::BenchmarkError;
use workpulse_core::events::types::BenchmarkEvaluatedEvent;
use workpulse_core::events::EventDispatcher;
use workpulse_core::types::{BenchmarkMetric, BenchmarkPreset, IndustryBaseline};

use crate::math::{clamp, est_percentile, pct_delta};
use crate::metrics::CompanyMetrics;

/// Deltas smaller than this (in percent) count as level with the baseline.
pub const FLAT_THRESHOLD: f64 = 0.001;

/// Which side of the baseline a company sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaDirection {
    Up,
    Down,
    Flat,
}

impl DeltaDirection {
    pub fn of(delta: f64) -> Self {
        if delta.abs() < FLAT_THRESHOLD {
            Self::Flat
        } else if delta > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub key: String,
    pub label: String,
    pub unit: String,
    pub company: Option<f64>,
    pub baseline: Option<f64>,
    pub delta: f64,
    pub percentile: f64,
    /// Company value bounded to the metric range; `None` when unknown.
    pub radar_value: Option<f64>,
    pub direction: DeltaDirection,
}

impl MetricComparison {
    fn evaluate(metric: &BenchmarkMetric, company: Option<f64>, baseline: Option<f64>) -> Self {
        let company = company.filter(|v| v.is_finite());
        let baseline = baseline.filter(|v| v.is_finite());
        let delta = pct_delta(company.unwrap_or(f64::NAN), baseline.unwrap_or(f64::NAN));
        Self {
            key: metric.key.clone(),
            label: metric.label.clone(),
            unit: metric.unit.clone(),
            company,
            baseline,
            delta,
            percentile: est_percentile(company.unwrap_or(f64::NAN), metric),
            radar_value: company.map(|v| clamp(v, metric.min, metric.max)),
            direction: DeltaDirection::of(delta),
        }
    }

    /// Badge text: `≈ 0%`, `↑ 4.2%` or `↓ 1.0%`.
    pub fn delta_label(&self) -> String {
        match self.direction {
            DeltaDirection::Flat => "≈ 0%".to_string(),
            DeltaDirection::Up => format!("↑ {:.1}%", self.delta.abs()),
            DeltaDirection::Down => format!("↓ {:.1}%", self.delta.abs()),
        }
    }

    /// Company value with its unit suffix, or `—` when unknown.
    pub fn company_label(&self) -> String {
        format_value(self.company, &self.unit)
    }

    /// Baseline value with its unit suffix, or `—` when unknown.
    pub fn baseline_label(&self) -> String {
        format_value(self.baseline, &self.unit)
    }
}

impl fmt::Display for MetricComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} vs industry {} ({})",
            self.label,
            self.company_label(),
            self.baseline_label(),
            self.delta_label()
        )
    }
}

fn format_value(value: Option<f64>, unit: &str) -> String {
    let suffix = match unit {
        "%" | "B" => unit,
        _ => "",
    };
    match value {
        Some(v) => format!("{v}{suffix}"),
        None => "—".to_string(),
    }
}

/// One comparison per catalog metric, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub industry: String,
    pub comparisons: Vec<MetricComparison>,
}

impl BenchmarkReport {
    pub fn evaluate(
        metrics: &CompanyMetrics,
        catalog: &[BenchmarkMetric],
        baseline: &IndustryBaseline,
    ) -> Self {
        let _span = benchmark_span!(baseline.name).entered();
        let comparisons: Vec<MetricComparison> = catalog
            .iter()
            .map(|m| MetricComparison::evaluate(m, metrics.get(&m.key), baseline.value(&m.key)))
            .collect();

        let report = Self {
            industry: baseline.name.clone(),
            comparisons,
        };
        tracing::debug!(
            metrics = report.comparisons.len(),
            above = report.above_baseline(),
            "benchmark evaluated"
        );
        report
    }

    /// Evaluate and notify `dispatcher`.
    pub fn evaluate_observed(
        metrics: &CompanyMetrics,
        catalog: &[BenchmarkMetric],
        baseline: &IndustryBaseline,
        dispatcher: &EventDispatcher,
    ) -> Self {
        let report = Self::evaluate(metrics, catalog, baseline);
        dispatcher.emit_benchmark_evaluated(&BenchmarkEvaluatedEvent {
            industry: report.industry.clone(),
            metric_count: report.comparisons.len(),
            above_baseline: report.above_baseline(),
        });
        report
    }

    pub fn comparison(&self, key: &str) -> Option<&MetricComparison> {
        self.comparisons.iter().find(|c| c.key == key)
    }

    /// Metrics where the company is above the baseline.
    pub fn above_baseline(&self) -> usize {
        self.comparisons
            .iter()
            .filter(|c| c.direction == DeltaDirection::Up)
            .count()
    }
}

/// Look up an industry baseline by name.
pub fn find_baseline<'a>(
    baselines: &'a [IndustryBaseline],
    industry: &str,
) -> Result<&'a IndustryBaseline, BenchmarkError> {
    baselines
        .iter()
        .find(|b| b.name == industry)
        .ok_or_else(|| BenchmarkError::UnknownIndustry(industry.to_string()))
}

/// The baseline selected on startup (`benchmark.default_industry`).
pub fn default_baseline<'a>(
    baselines: &'a [IndustryBaseline],
    config: &BenchmarkConfig,
) -> Result<&'a IndustryBaseline, BenchmarkError> {
    find_baseline(baselines, config.effective_default_industry())
}

/// Look up a company preset by name.
pub fn find_preset<'a>(
    presets: &'a [BenchmarkPreset],
    name: &str,
) -> Result<&'a BenchmarkPreset, BenchmarkError> {
    presets
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| BenchmarkError::UnknownPreset(name.to_string()))
}
