use proptest::prelude::*;
use workpulse_insights::{heat_intensity, trend_score, CompareSelection, DEFAULT_TREND_NOISE};
use workpulse_store::RecordStore;

proptest! {
    #[test]
    fn trend_score_is_bounded(
        base in -2.0f64..3.0,
        clock in any::<i64>(),
        jitter in -0.5f64..0.5,
    ) {
        let s = trend_score(base, clock, jitter, DEFAULT_TREND_NOISE);
        prop_assert!((-1.0..=1.0).contains(&s.score));
        prop_assert!((0.5..=1.0).contains(&s.confidence));
    }

    #[test]
    fn heat_intensity_never_exceeds_one(value in any::<f64>()) {
        let i = heat_intensity(value);
        prop_assert!(!i.is_nan());
        prop_assert!(i <= 1.0);
    }

    #[test]
    fn compare_selection_respects_cap(ops in prop::collection::vec(0usize..5, 0..30)) {
        let store = RecordStore::seeded().unwrap();
        let companies = store.companies();
        let mut selection = CompareSelection::new(companies);
        for i in ops {
            selection = selection.toggle(&companies[i].key);
            prop_assert!(selection.keys().len() <= selection.max_selected());
            let mut keys = selection.keys().to_vec();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), selection.keys().len());
        }
    }
}
