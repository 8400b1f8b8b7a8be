//! # workpulse-peers
//!
//! Ranks companies by profile similarity. Each company becomes a feature
//! vector (one binary entry per category label plus a relative size entry)
//! and peers are ordered by cosine similarity to the target.

pub mod feature_space;
pub mod ranking;
pub mod similarity;

pub use feature_space::{FeatureSpace, FeatureVector};
pub use ranking::{rank_peers, rank_peers_by_key, rank_peers_observed, PeerMatch};
pub use similarity::cosine_similarity;
