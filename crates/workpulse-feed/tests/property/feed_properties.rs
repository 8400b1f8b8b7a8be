use proptest::prelude::*;
use rustc_hash::FxHashSet;
use workpulse_core::types::{Entities, NewsItem, SortOrder};
use workpulse_feed::{filter_and_sort, paginate};

const SOURCES: [&str; 4] = ["TLNT", "HR Dive", "Unleash", "HR Zone"];

fn arb_item() -> impl Strategy<Value = NewsItem> {
    (
        0usize..SOURCES.len(),
        "[a-zA-Z ]{0,24}",
        prop_oneof![
            (1u32..=28, 0u32..24).prop_map(|(d, h)| format!("2025-08-{d:02}T{h:02}:00:00Z")),
            (1u32..=12).prop_map(|m| format!("2024-{m:02}")),
            Just("not a date".to_string()),
        ],
        prop::collection::vec("[a-zA-Z]{1,8}", 0..3),
    )
        .prop_map(|(source, title, published_at, keywords)| NewsItem {
            id: String::new(),
            source: SOURCES[source].to_string(),
            title,
            url: String::new(),
            published_at,
            keywords,
            entities: Entities::default(),
        })
}

fn arb_feed() -> impl Strategy<Value = Vec<NewsItem>> {
    prop::collection::vec(arb_item(), 0..40).prop_map(|mut items| {
        for (i, item) in items.iter_mut().enumerate() {
            item.id = format!("n{i}");
        }
        items
    })
}

fn arb_sources() -> impl Strategy<Value = FxHashSet<String>> {
    prop::collection::vec(0usize..SOURCES.len(), 0..3)
        .prop_map(|idx| idx.into_iter().map(|i| SOURCES[i].to_string()).collect())
}

fn arb_sort() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Newest), Just(SortOrder::Oldest)]
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        items in arb_feed(),
        sources in arb_sources(),
        query in "[a-z]{0,3}",
        sort in arb_sort(),
    ) {
        let once: Vec<NewsItem> = filter_and_sort(&items, &sources, &query, sort)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<NewsItem> = filter_and_sort(&once, &sources, &query, sort)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn output_is_drawn_from_input_without_duplicates(
        items in arb_feed(),
        sources in arb_sources(),
        query in "[a-z]{0,3}",
        sort in arb_sort(),
    ) {
        let out = filter_and_sort(&items, &sources, &query, sort);
        let mut seen = FxHashSet::default();
        for item in &out {
            prop_assert!(items.iter().any(|i| std::ptr::eq(i, *item)));
            prop_assert!(seen.insert(item.id.clone()), "duplicate {}", item.id);
        }
        prop_assert!(out.len() <= items.len());
    }

    #[test]
    fn empty_selection_keeps_every_source(items in arb_feed(), sort in arb_sort()) {
        let out = filter_and_sort(&items, &FxHashSet::default(), "", sort);
        prop_assert_eq!(out.len(), items.len());
    }

    #[test]
    fn output_is_ordered_by_timestamp(items in arb_feed(), sort in arb_sort()) {
        let out = filter_and_sort(&items, &FxHashSet::default(), "", sort);
        for pair in out.windows(2) {
            let (a, b) = (pair[0].sort_key(), pair[1].sort_key());
            match sort {
                SortOrder::Newest => prop_assert!(a >= b),
                SortOrder::Oldest => prop_assert!(a <= b),
            }
        }
    }

    #[test]
    fn order_matches_reference_stable_sort(items in arb_feed(), sort in arb_sort()) {
        let mut expected: Vec<&NewsItem> = items.iter().collect();
        match sort {
            SortOrder::Newest => expected.sort_by_key(|i| std::cmp::Reverse(i.sort_key())),
            SortOrder::Oldest => expected.sort_by_key(|i| i.sort_key()),
        }
        let out = filter_and_sort(&items, &FxHashSet::default(), "", sort);
        let got: Vec<&str> = out.iter().map(|i| i.id.as_str()).collect();
        let want: Vec<&str> = expected.iter().map(|i| i.id.as_str()).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn pagination_grows_monotonically(
        total in 0usize..60,
        page in 1usize..12,
        page_size in 1usize..10,
    ) {
        let matches: Vec<usize> = (0..total).collect();
        let current = paginate(matches.clone(), page, page_size);
        let next = paginate(matches, page + 1, page_size);
        prop_assert!(current.len() <= next.len());
        prop_assert_eq!(current.len(), total.min(page * page_size));
        prop_assert_eq!(&next[..current.len()], &current[..]);
    }
}
