use proptest::prelude::*;
use workpulse_core::constants::DEFAULT_FEATURE_LABELS;
use workpulse_core::types::Company;
use workpulse_peers::{cosine_similarity, rank_peers, FeatureSpace};

fn arb_company() -> impl Strategy<Value = Company> {
    (
        0usize..4,
        prop::collection::vec(0usize..DEFAULT_FEATURE_LABELS.len(), 0..4),
        prop::option::of(0.0f64..800.0),
    )
        .prop_map(|(key, tags, headcount_k)| Company {
            key: format!("C{key}"),
            name: String::new(),
            initials: String::new(),
            color: String::new(),
            revenue: String::new(),
            growth: String::new(),
            tags: tags.into_iter().map(|i| DEFAULT_FEATURE_LABELS[i].to_string()).collect(),
            sentiment_now: 0.0,
            news_velocity: Vec::new(),
            sentiment_trend: Vec::new(),
            leaders: Vec::new(),
            headcount_k,
        })
}

proptest! {
    #[test]
    fn cosine_stays_in_bounds(
        a in prop::collection::vec(-1e6f64..1e6, 1..12),
        b in prop::collection::vec(-1e6f64..1e6, 1..12),
    ) {
        let sim = cosine_similarity(&a, &b);
        prop_assert!(!sim.is_nan());
        prop_assert!((-1.0..=1.0).contains(&sim));
    }

    #[test]
    fn cosine_of_self_is_one_or_zero(a in prop::collection::vec(-100.0f64..100.0, 1..12)) {
        let sim = cosine_similarity(&a, &a);
        if a.iter().all(|x| *x == 0.0) {
            prop_assert_eq!(sim, 0.0);
        } else {
            prop_assert_eq!(sim, 1.0);
        }
    }

    #[test]
    fn target_never_ranks_itself(
        target in arb_company(),
        companies in prop::collection::vec(arb_company(), 0..12),
    ) {
        let space = FeatureSpace::default();
        let peers = rank_peers(&target, &companies, &space);
        let expected = companies.iter().filter(|c| c.key != target.key).count();
        prop_assert_eq!(peers.len(), expected);
        prop_assert!(peers.iter().all(|p| p.company.key != target.key));
        prop_assert!(peers.windows(2).all(|w| w[0].similarity >= w[1].similarity));
    }
}
