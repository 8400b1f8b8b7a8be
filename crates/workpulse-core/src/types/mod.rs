//! Record types shared by every Workpulse crate.
//!
//! Records are deserialized from camelCase JSON seed files. Loosely-typed
//! source fields are explicit `Option`s or defaulted collections.

pub mod benchmark;
pub mod collections;
pub mod company;
pub mod insights;
pub mod news;

pub use benchmark::{BenchmarkMetric, BenchmarkPreset, IndustryBaseline, Kpi, MonthlySentiment};
pub use company::{Attribution, Company, Leader, SeriesPoint};
pub use insights::{GeoActivity, TalentMove, TimelineEvent, TrendTopic};
pub use news::{Entities, NewsItem, SortOrder};
