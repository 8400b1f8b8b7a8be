//! # workpulse-feed
//!
//! The feed query engine. A pure function of (items, selected sources,
//! free-text query, sort order, page) that returns a borrowed, ordered
//! subsequence of the input news items.

pub mod engine;
pub mod filter;
pub mod query;

pub use engine::{filter_and_sort, page_count, paginate};
pub use query::{FeedPage, FeedQuery};
