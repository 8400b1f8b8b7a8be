//! Synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::DashboardEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn DashboardEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn DashboardEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not prevent later handlers from running.
    fn emit<F: Fn(&dyn DashboardEventHandler)>(&self, f: F) {
        for (index, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(handler = index, "event handler panicked");
            }
        }
    }

    pub fn emit_feed_queried(&self, event: &FeedQueriedEvent) {
        self.emit(|h| h.on_feed_queried(event));
    }

    pub fn emit_watchlist_changed(&self, event: &WatchlistChangedEvent) {
        self.emit(|h| h.on_watchlist_changed(event));
    }

    pub fn emit_peers_ranked(&self, event: &PeersRankedEvent) {
        self.emit(|h| h.on_peers_ranked(event));
    }

    pub fn emit_benchmark_evaluated(&self, event: &BenchmarkEvaluatedEvent) {
        self.emit(|h| h.on_benchmark_evaluated(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
