//! Tests for the Workpulse event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use workpulse_core::events::types::*;
use workpulse_core::events::{DashboardEventHandler, EventDispatcher};

#[derive(Default)]
struct CountingHandler {
    watchlist: AtomicUsize,
    peers: AtomicUsize,
}

impl DashboardEventHandler for CountingHandler {
    fn on_watchlist_changed(&self, _event: &WatchlistChangedEvent) {
        self.watchlist.fetch_add(1, Ordering::Relaxed);
    }

    fn on_peers_ranked(&self, _event: &PeersRankedEvent) {
        self.peers.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl DashboardEventHandler for PanickingHandler {
    fn on_watchlist_changed(&self, _event: &WatchlistChangedEvent) {
        panic!("handler failure");
    }
}

fn watchlist_event() -> WatchlistChangedEvent {
    WatchlistChangedEvent {
        company_key: "MERCER".to_string(),
        followed: true,
        size: 1,
    }
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_watchlist_changed(&watchlist_event());
}

#[test]
fn events_reach_every_handler() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.emit_watchlist_changed(&watchlist_event());
    dispatcher.emit_peers_ranked(&PeersRankedEvent {
        company_key: "AON".to_string(),
        peer_count: 4,
        top_peer: Some("WTW".to_string()),
    });

    assert_eq!(a.watchlist.load(Ordering::Relaxed), 1);
    assert_eq!(b.watchlist.load(Ordering::Relaxed), 1);
    assert_eq!(a.peers.load(Ordering::Relaxed), 1);
}

#[test]
fn unhandled_events_use_default_no_ops() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(counter.clone());
    dispatcher.emit_benchmark_evaluated(&BenchmarkEvaluatedEvent {
        industry: "HR Tech Vendors".to_string(),
        metric_count: 4,
        above_baseline: 2,
    });
    assert_eq!(counter.watchlist.load(Ordering::Relaxed), 0);
}

#[test]
fn panicking_handler_does_not_block_later_handlers() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_watchlist_changed(&watchlist_event());
    assert_eq!(counter.watchlist.load(Ordering::Relaxed), 1);
}
