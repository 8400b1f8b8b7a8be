//! DashboardEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing dashboard state changes.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait DashboardEventHandler: Send + Sync {
    fn on_feed_queried(&self, _event: &FeedQueriedEvent) {}
    fn on_watchlist_changed(&self, _event: &WatchlistChangedEvent) {}
    fn on_peers_ranked(&self, _event: &PeersRankedEvent) {}
    fn on_benchmark_evaluated(&self, _event: &BenchmarkEvaluatedEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}
