//! Top-level Workpulse configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BenchmarkConfig, CompareConfig, FeedConfig, PeersConfig, StoreConfig};
use crate::errors::ConfigError;
use crate::types::SortOrder;

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "workpulse.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`WORKPULSE_*`)
/// 3. Project config (`workpulse.toml` in project root)
/// 4. User config (`~/.workpulse/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkpulseConfig {
    pub feed: FeedConfig,
    pub peers: PeersConfig,
    pub benchmark: BenchmarkConfig,
    pub store: StoreConfig,
    pub compare: CompareConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub page_size: Option<usize>,
    pub default_sort: Option<SortOrder>,
    pub dataset_dir: Option<String>,
    pub state_db_path: Option<String>,
}

impl WorkpulseConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Unreadable user config is not fatal,
        // but a user config that exists and is malformed is.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &WorkpulseConfig) -> Result<(), ConfigError> {
        if config.feed.page_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "feed.page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(reference) = config.peers.size_reference {
            if !reference.is_finite() || reference <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "peers.size_reference".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if let Some(size) = config.peers.default_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "peers.default_size".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if config.compare.max_selected == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "compare.max_selected".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.peers.feature_labels.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "peers.feature_labels".to_string(),
                message: "labels must be non-empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.workpulse/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".workpulse").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WorkpulseConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WorkpulseConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut WorkpulseConfig, other: &WorkpulseConfig) {
        // Feed
        if other.feed.page_size.is_some() {
            base.feed.page_size = other.feed.page_size;
        }
        if other.feed.default_sort.is_some() {
            base.feed.default_sort = other.feed.default_sort;
        }

        // Peers
        if !other.peers.feature_labels.is_empty() {
            base.peers.feature_labels = other.peers.feature_labels.clone();
        }
        if other.peers.size_reference.is_some() {
            base.peers.size_reference = other.peers.size_reference;
        }
        if other.peers.default_size.is_some() {
            base.peers.default_size = other.peers.default_size;
        }

        // Benchmark
        if other.benchmark.default_industry.is_some() {
            base.benchmark.default_industry = other.benchmark.default_industry.clone();
        }

        // Store
        if other.store.dataset_dir.is_some() {
            base.store.dataset_dir = other.store.dataset_dir.clone();
        }
        if other.store.state_db_path.is_some() {
            base.store.state_db_path = other.store.state_db_path.clone();
        }
        if other.store.watchlist_key.is_some() {
            base.store.watchlist_key = other.store.watchlist_key.clone();
        }

        // Compare
        if other.compare.max_selected.is_some() {
            base.compare.max_selected = other.compare.max_selected;
        }
        if other.compare.seed_count.is_some() {
            base.compare.seed_count = other.compare.seed_count;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `WORKPULSE_FEED_PAGE_SIZE`, `WORKPULSE_STORE_DATASET_DIR`, etc.
    /// Values that fail to parse are ignored.
    fn apply_env_overrides(config: &mut WorkpulseConfig) {
        if let Ok(val) = std::env::var("WORKPULSE_FEED_PAGE_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.feed.page_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WORKPULSE_FEED_DEFAULT_SORT") {
            if let Some(v) = SortOrder::parse(&val) {
                config.feed.default_sort = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WORKPULSE_PEERS_SIZE_REFERENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.peers.size_reference = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WORKPULSE_PEERS_DEFAULT_SIZE") {
            if let Ok(v) = val.parse::<f64>() {
                config.peers.default_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WORKPULSE_BENCHMARK_DEFAULT_INDUSTRY") {
            config.benchmark.default_industry = Some(val);
        }
        if let Ok(val) = std::env::var("WORKPULSE_STORE_DATASET_DIR") {
            config.store.dataset_dir = Some(val);
        }
        if let Ok(val) = std::env::var("WORKPULSE_STORE_STATE_DB_PATH") {
            config.store.state_db_path = Some(val);
        }
        if let Ok(val) = std::env::var("WORKPULSE_STORE_WATCHLIST_KEY") {
            config.store.watchlist_key = Some(val);
        }
        if let Ok(val) = std::env::var("WORKPULSE_COMPARE_MAX_SELECTED") {
            if let Ok(v) = val.parse::<usize>() {
                config.compare.max_selected = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WORKPULSE_COMPARE_SEED_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.compare.seed_count = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut WorkpulseConfig, cli: &CliOverrides) {
        if let Some(v) = cli.page_size {
            config.feed.page_size = Some(v);
        }
        if let Some(v) = cli.default_sort {
            config.feed.default_sort = Some(v);
        }
        if let Some(ref v) = cli.dataset_dir {
            config.store.dataset_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.state_db_path {
            config.store.state_db_path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
