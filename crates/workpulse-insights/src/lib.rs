//! # workpulse-insights
//!
//! Derived views over the static insight datasets. Everything here is a pure
//! function of its inputs; trend scoring takes the clock and jitter as
//! explicit arguments so results are reproducible.

pub mod compare;
pub mod heatmap;
pub mod report;
pub mod sentiment;
pub mod talent;
pub mod timeline;
pub mod trend;

pub use compare::CompareSelection;
pub use heatmap::{heat_grid, heat_intensity, HeatCell};
pub use report::{ActivityAnomaly, InsightSnapshot};
pub use sentiment::{parse_pct, sentiment_vs_reality, Quadrant, SentimentPoint};
pub use talent::{filter_moves, role_options, RoleFilter};
pub use timeline::{group_by_lane, Lane};
pub use trend::{predict_trends, trend_score, TrendRow, TrendScore, DEFAULT_TREND_NOISE};
