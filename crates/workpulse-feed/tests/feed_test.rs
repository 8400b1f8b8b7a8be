//! Feed engine tests against the seeded news dataset.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashSet;
use workpulse_core::config::FeedConfig;
use workpulse_core::events::handler::DashboardEventHandler;
use workpulse_core::events::types::FeedQueriedEvent;
use workpulse_core::events::EventDispatcher;
use workpulse_core::types::{NewsItem, SortOrder};
use workpulse_feed::{filter_and_sort, paginate, FeedQuery};
use workpulse_store::RecordStore;

fn item(id: &str, source: &str, title: &str, published_at: &str) -> NewsItem {
    NewsItem {
        id: id.to_string(),
        source: source.to_string(),
        title: title.to_string(),
        url: String::new(),
        published_at: published_at.to_string(),
        keywords: Vec::new(),
        entities: Default::default(),
    }
}

fn ids(items: &[&NewsItem]) -> Vec<String> {
    items.iter().map(|n| n.id.clone()).collect()
}

#[test]
fn newest_orders_dates_descending() {
    let items = vec![
        item("a", "TLNT", "first", "2025-08-01"),
        item("b", "TLNT", "second", "2025-08-05"),
        item("c", "TLNT", "third", "2025-08-03"),
    ];
    let sorted = filter_and_sort(&items, &FxHashSet::default(), "", SortOrder::Newest);
    assert_eq!(ids(&sorted), ["b", "c", "a"]);

    let sorted = filter_and_sort(&items, &FxHashSet::default(), "", SortOrder::Oldest);
    assert_eq!(ids(&sorted), ["a", "c", "b"]);
}

#[test]
fn lowercase_query_matches_capitalized_title() {
    let items = vec![
        item("m", "HR Dive", "Mercer expands pay transparency offering", "2025-08-02"),
        item("o", "HR Dive", "Unrelated story", "2025-08-02"),
    ];
    let found = filter_and_sort(&items, &FxHashSet::default(), "mercer", SortOrder::Newest);
    assert_eq!(ids(&found), ["m"]);
}

#[test]
fn query_matches_entity_labels_in_seed() {
    let store = RecordStore::seeded().unwrap();
    // "Mercer" only appears as an org entity in the seed, never in a title.
    let found = filter_and_sort(store.news(), &FxHashSet::default(), "mercer", SortOrder::Newest);
    assert_eq!(ids(&found), ["n1", "n10"]);
}

#[test]
fn unparseable_dates_sort_as_oldest() {
    let items = vec![
        item("bad", "TLNT", "x", "yesterday"),
        item("ok", "TLNT", "y", "2025-08-01"),
    ];
    let newest = filter_and_sort(&items, &FxHashSet::default(), "", SortOrder::Newest);
    assert_eq!(ids(&newest), ["ok", "bad"]);
    let oldest = filter_and_sort(&items, &FxHashSet::default(), "", SortOrder::Oldest);
    assert_eq!(ids(&oldest), ["bad", "ok"]);
}

#[test]
fn equal_timestamps_keep_input_order() {
    let items = vec![
        item("a", "TLNT", "x", "2025-08-01"),
        item("b", "TLNT", "x", "not a date"),
        item("c", "TLNT", "x", "2025-08-01"),
        item("d", "TLNT", "x", "??"),
        item("e", "TLNT", "x", "2025-08-01T00:00Z"),
    ];
    let newest = filter_and_sort(&items, &FxHashSet::default(), "", SortOrder::Newest);
    assert_eq!(ids(&newest), ["a", "c", "e", "b", "d"]);
    let oldest = filter_and_sort(&items, &FxHashSet::default(), "", SortOrder::Oldest);
    assert_eq!(ids(&oldest), ["b", "d", "a", "c", "e"]);
}

#[test]
fn seed_feed_pages_by_six() {
    let store = RecordStore::seeded().unwrap();
    let query = FeedQuery::default();

    let first = query.run(store.news());
    assert_eq!(first.total_matches, 10);
    assert_eq!(first.items.len(), 6);
    assert_eq!(first.page_count, 2);
    assert!(first.has_more());
    assert_eq!(first.items[0].id, "n7");

    let second = query.load_more(first.total_matches).run(store.news());
    assert_eq!(second.items.len(), 10);
    assert!(!second.has_more());
    assert_eq!(&second.items[..6], &first.items[..]);
}

#[test]
fn source_selection_restricts_seed_feed() {
    let store = RecordStore::seeded().unwrap();
    let query = FeedQuery::default()
        .toggle_source("TLNT")
        .toggle_source("Unleash");
    let page = query.run(store.news());
    assert_eq!(ids(&page.items), ["n9", "n2"]);
    assert_eq!(page.page_count, 1);
}

#[test]
fn no_matches_still_reports_one_page() {
    let store = RecordStore::seeded().unwrap();
    let page = FeedQuery::default()
        .with_query("no such topic anywhere")
        .run(store.news());
    assert!(page.items.is_empty());
    assert_eq!(page.total_matches, 0);
    assert_eq!(page.page_count, 1);
}

#[test]
fn paginate_treats_page_zero_as_one() {
    let values = vec![1, 2, 3, 4, 5];
    assert_eq!(paginate(values.clone(), 0, 2), vec![1, 2]);
    assert_eq!(paginate(values, 9, 2), vec![1, 2, 3, 4, 5]);
}

#[test]
fn config_sets_page_size_and_sort() {
    let config = FeedConfig {
        page_size: Some(3),
        default_sort: Some(SortOrder::Oldest),
    };
    let query = FeedQuery::from_config(&config);
    assert_eq!(query.page_size(), 3);
    assert_eq!(query.sort(), SortOrder::Oldest);
    assert_eq!(query.page(), 1);
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<FeedQueriedEvent>>,
}

impl DashboardEventHandler for Recorder {
    fn on_feed_queried(&self, event: &FeedQueriedEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

#[test]
fn run_observed_reports_counts() {
    let store = RecordStore::seeded().unwrap();
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());

    let page = FeedQuery::default()
        .with_query("ai")
        .run_observed(store.news(), &dispatcher);

    let events = recorder.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].query, "ai");
    assert_eq!(events[0].total_matches, page.total_matches);
    assert_eq!(events[0].shown, page.items.len());
}
