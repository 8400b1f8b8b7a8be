//! Configuration system for Workpulse.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod benchmark_config;
pub mod compare_config;
pub mod feed_config;
pub mod peers_config;
pub mod store_config;
pub mod workpulse_config;

pub use benchmark_config::BenchmarkConfig;
pub use compare_config::CompareConfig;
pub use feed_config::FeedConfig;
pub use peers_config::PeersConfig;
pub use store_config::StoreConfig;
pub use workpulse_config::{CliOverrides, WorkpulseConfig};
