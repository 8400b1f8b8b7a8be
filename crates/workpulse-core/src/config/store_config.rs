//! Record store and persisted-state configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STATE_DB_PATH, WATCHLIST_STATE_KEY};

/// Configuration for datasets and persisted state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory of JSON datasets replacing the embedded seed. Default: none.
    pub dataset_dir: Option<String>,
    /// SQLite file holding persisted state. Default: "workpulse.db".
    pub state_db_path: Option<String>,
    /// Key under which the watchlist is stored. Default: "workpulse_watchlist".
    pub watchlist_key: Option<String>,
}

impl StoreConfig {
    pub fn effective_state_db_path(&self) -> &str {
        self.state_db_path.as_deref().unwrap_or(DEFAULT_STATE_DB_PATH)
    }

    pub fn effective_watchlist_key(&self) -> &str {
        self.watchlist_key.as_deref().unwrap_or(WATCHLIST_STATE_KEY)
    }
}
