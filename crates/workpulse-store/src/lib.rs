//! # workpulse-store
//!
//! The record store: static, read-only collections of news items, company
//! profiles, benchmark baselines and supporting datasets, plus the one piece
//! of persisted mutable state (the watchlist of followed companies).

pub mod dataset;
pub mod record_store;
pub mod state;
pub mod watchlist;

pub use record_store::RecordStore;
pub use state::{MemoryStateBackend, SqliteStateBackend, StateBackend};
pub use watchlist::{Watchlist, WatchlistStore};
