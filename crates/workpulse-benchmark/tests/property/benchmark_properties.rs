use proptest::prelude::*;
use workpulse_benchmark::{clamp, est_percentile, pct_delta};
use workpulse_core::types::BenchmarkMetric;

fn metric(min: f64, max: f64) -> BenchmarkMetric {
    BenchmarkMetric {
        key: "m".to_string(),
        label: "M".to_string(),
        unit: "%".to_string(),
        min,
        max,
    }
}

proptest! {
    #[test]
    fn percentile_is_bounded(value in any::<f64>(), min in -1e6f64..1e6, span in -10.0f64..1e6) {
        let p = est_percentile(value, &metric(min, min + span));
        prop_assert!((0.0..=100.0).contains(&p), "percentile {p}");
        prop_assert_eq!(p, p.round());
    }

    #[test]
    fn delta_against_zero_is_zero(company in any::<f64>()) {
        prop_assert_eq!(pct_delta(company, 0.0), 0.0);
    }

    #[test]
    fn delta_is_never_nan(company in any::<f64>(), baseline in any::<f64>()) {
        prop_assert!(!pct_delta(company, baseline).is_nan());
    }

    #[test]
    fn clamp_stays_in_range(value in any::<f64>(), min in -1e3f64..1e3, span in 0.0f64..1e3) {
        let max = min + span;
        let c = clamp(value, min, max);
        prop_assert!(c >= min && c <= max);
    }
}
