//! Trend prediction scores.

use serde::Serialize;
use workpulse_core::types::TrendTopic;

/// Weight of the random jitter term when no noise is given.
pub const DEFAULT_TREND_NOISE: f64 = 0.08;

/// Period divisor for the clock-driven momentum wave.
const MOMENTUM_PERIOD_MS: f64 = 5e7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendScore {
    /// In [-1, 1].
    pub score: f64,
    /// In [0.5, 1].
    pub confidence: f64,
}

/// Score a topic of baseline strength `base` at `clock_millis`.
///
/// `jitter` is expected in [-0.5, 0.5] and is scaled by `noise`.
pub fn trend_score(base: f64, clock_millis: i64, jitter: f64, noise: f64) -> TrendScore {
    let momentum = ((clock_millis as f64 / MOMENTUM_PERIOD_MS + base * 10.0).sin() + 1.0) / 2.0;
    let score = (base * 0.6 + momentum * 0.4 + jitter * noise) * 2.0 - 1.0;
    let confidence = 0.6 + (base - 0.5).abs() * 0.7;
    TrendScore {
        score: bound(score, -1.0, 1.0),
        confidence: bound(confidence, 0.5, 1.0),
    }
}

fn bound(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// A scored topic as displayed: whole-number score out of 100 and
/// confidence percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub topic: String,
    pub score: i64,
    pub confidence: i64,
    pub drivers: Vec<String>,
}

/// Score every topic. `jitter` is called once per topic, in order.
pub fn predict_trends<F>(topics: &[TrendTopic], clock_millis: i64, mut jitter: F) -> Vec<TrendRow>
where
    F: FnMut(&TrendTopic) -> f64,
{
    topics
        .iter()
        .map(|t| {
            let s = trend_score(t.base, clock_millis, jitter(t), DEFAULT_TREND_NOISE);
            TrendRow {
                topic: t.topic.clone(),
                score: (s.score * 100.0).round() as i64,
                confidence: (s.confidence * 100.0).round() as i64,
                drivers: t.drivers.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_fixed_inputs() {
        let a = trend_score(0.72, 1_754_000_000_000, 0.1, DEFAULT_TREND_NOISE);
        let b = trend_score(0.72, 1_754_000_000_000, 0.1, DEFAULT_TREND_NOISE);
        assert_eq!(a, b);
    }

    #[test]
    fn confidence_grows_away_from_midpoint() {
        assert!((trend_score(0.5, 0, 0.0, 0.0).confidence - 0.6).abs() < 1e-12);
        assert!((trend_score(0.9, 0, 0.0, 0.0).confidence - 0.88).abs() < 1e-12);
        assert!((trend_score(0.0, 0, 0.0, 0.0).confidence - 0.95).abs() < 1e-12);
        assert_eq!(trend_score(5.0, 0, 0.0, 0.0).confidence, 1.0);
    }

    #[test]
    fn score_formula_at_known_phase() {
        // sin(0) = 0, so momentum is 0.5 when base = 0 and the clock is 0.
        let s = trend_score(0.0, 0, 0.0, DEFAULT_TREND_NOISE);
        assert!((s.score - (-0.6)).abs() < 1e-12);
    }
}
