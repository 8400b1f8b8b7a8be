//! Delta and percentile arithmetic.

use workpulse_core::types::BenchmarkMetric;

/// Bound `value` to `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: an inverted range yields `max`,
/// and a NaN `value` yields `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(value))
}

/// Relative difference of `company` over `baseline`, in percent.
///
/// Returns 0.0 when the baseline is zero or non-finite, or when the company
/// value is non-finite.
pub fn pct_delta(company: f64, baseline: f64) -> f64 {
    if !baseline.is_finite() || baseline == 0.0 || !company.is_finite() {
        return 0.0;
    }
    (company - baseline) / baseline * 100.0
}

/// Linear position of `value` within the metric range, as a whole percentile.
///
/// 0 for a non-finite value; 50 for an empty, inverted or non-finite range;
/// otherwise rounded and clamped to [0, 100].
pub fn est_percentile(value: f64, range: &BenchmarkMetric) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let (min, max) = (range.min, range.max);
    if !min.is_finite() || !max.is_finite() || max <= min {
        return 50.0;
    }
    let p = (value - min) / (max - min) * 100.0;
    clamp(p.round(), 0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> BenchmarkMetric {
        BenchmarkMetric {
            key: "ai".to_string(),
            label: "AI Adoption %".to_string(),
            unit: "%".to_string(),
            min,
            max,
        }
    }

    #[test]
    fn delta_is_relative_percent() {
        assert!((pct_delta(64.0, 62.0) - 3.2258).abs() < 1e-3);
        assert_eq!(pct_delta(40.0, 50.0), -20.0);
    }

    #[test]
    fn delta_guards_degenerate_inputs() {
        assert_eq!(pct_delta(10.0, 0.0), 0.0);
        assert_eq!(pct_delta(10.0, f64::NAN), 0.0);
        assert_eq!(pct_delta(10.0, f64::INFINITY), 0.0);
        assert_eq!(pct_delta(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn percentile_rounds_and_clamps() {
        let r = range(10.0, 90.0);
        assert_eq!(est_percentile(70.0, &r), 75.0);
        assert_eq!(est_percentile(50.0, &r), 50.0);
        assert_eq!(est_percentile(5.0, &r), 0.0);
        assert_eq!(est_percentile(150.0, &r), 100.0);
        assert_eq!(est_percentile(f64::NAN, &r), 0.0);
    }

    #[test]
    fn percentile_of_degenerate_range_is_fifty() {
        assert_eq!(est_percentile(3.0, &range(5.0, 5.0)), 50.0);
        assert_eq!(est_percentile(3.0, &range(9.0, 1.0)), 50.0);
        assert_eq!(est_percentile(3.0, &range(f64::NEG_INFINITY, 1.0)), 50.0);
    }

    #[test]
    fn clamp_tolerates_inverted_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }
}
