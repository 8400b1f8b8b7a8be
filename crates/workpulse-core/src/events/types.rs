//! Event payload types for dashboard state changes.

use crate::types::SortOrder;

/// Payload for `on_feed_queried`.
#[derive(Debug, Clone)]
pub struct FeedQueriedEvent {
    pub query: String,
    pub source_count: usize,
    pub sort: SortOrder,
    pub page: usize,
    pub total_matches: usize,
    pub shown: usize,
}

/// Payload for `on_watchlist_changed`.
#[derive(Debug, Clone)]
pub struct WatchlistChangedEvent {
    pub company_key: String,
    pub followed: bool,
    pub size: usize,
}

/// Payload for `on_peers_ranked`.
#[derive(Debug, Clone)]
pub struct PeersRankedEvent {
    pub company_key: String,
    pub peer_count: usize,
    pub top_peer: Option<String>,
}

/// Payload for `on_benchmark_evaluated`.
#[derive(Debug, Clone)]
pub struct BenchmarkEvaluatedEvent {
    pub industry: String,
    pub metric_count: usize,
    pub above_baseline: usize,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
