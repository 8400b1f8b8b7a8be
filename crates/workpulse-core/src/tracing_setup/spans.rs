//! Span definitions per operation: feed query, peer ranking, benchmark, watchlist.

/// Create a feed query span.
#[macro_export]
macro_rules! feed_span {
    ($query:expr, $sort:expr) => {
        tracing::debug_span!("workpulse.feed", query = %$query, sort = ?$sort)
    };
}

/// Create a peer ranking span.
#[macro_export]
macro_rules! peers_span {
    ($company_key:expr) => {
        tracing::debug_span!("workpulse.peers", company = %$company_key)
    };
}

/// Create a benchmark evaluation span.
#[macro_export]
macro_rules! benchmark_span {
    ($industry:expr) => {
        tracing::debug_span!("workpulse.benchmark", industry = %$industry)
    };
}

/// Create a watchlist persistence span.
#[macro_export]
macro_rules! watchlist_span {
    ($op:expr) => {
        tracing::debug_span!("workpulse.watchlist", op = $op)
    };
}

