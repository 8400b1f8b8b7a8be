//! The watchlist: followed company keys, persisted as one JSON array.

use std::sync::Arc;

use workpulse_core::config::StoreConfig;
use workpulse_core::constants::WATCHLIST_STATE_KEY;
use workpulse_core::errors::{StorageError, WorkpulseErrorCode};
use workpulse_core::events::types::{ErrorEvent, WatchlistChangedEvent};
use workpulse_core::events::EventDispatcher;
use workpulse_core::watchlist_span;

use crate::state::StateBackend;

/// Ordered, duplicate-free list of followed company keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    keys: Vec<String>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from keys, dropping repeats after their first occurrence.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for key in keys {
            let key = key.into();
            if !list.contains(&key) {
                list.keys.push(key);
            }
        }
        list
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Returns a new list with `key` removed if followed, appended otherwise.
    pub fn toggle(&self, key: &str) -> Self {
        let keys = if self.contains(key) {
            self.keys.iter().filter(|k| *k != key).cloned().collect()
        } else {
            let mut keys = self.keys.clone();
            keys.push(key.to_string());
            keys
        };
        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Load/save boundary for the watchlist.
///
/// Reads never fail: absent, malformed or unreadable state is an empty list.
/// Every change is written back in full.
pub struct WatchlistStore<B: StateBackend> {
    backend: B,
    key: String,
    dispatcher: Option<Arc<EventDispatcher>>,
}

impl<B: StateBackend> WatchlistStore<B> {
    /// Store under the default key (`workpulse_watchlist`).
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, WATCHLIST_STATE_KEY)
    }

    /// Store under the configured key (`store.watchlist_key`).
    pub fn from_config(backend: B, config: &StoreConfig) -> Self {
        Self::with_key(backend, config.effective_watchlist_key())
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            dispatcher: None,
        }
    }

    /// Attach a dispatcher notified on every toggle.
    pub fn with_dispatcher(mut self, dispatcher: Arc<EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the persisted watchlist, degrading to empty on any anomaly.
    pub fn load(&self) -> Watchlist {
        let _span = watchlist_span!("load").entered();
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Watchlist::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "watchlist unreadable, starting empty");
                return Watchlist::new();
            }
        };
        decode(&self.key, &raw)
    }

    /// Write the full watchlist as a JSON array.
    pub fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError> {
        let _span = watchlist_span!("save").entered();
        let json =
            serde_json::to_string(watchlist.keys()).map_err(|e| StorageError::EncodingFailed {
                key: self.key.clone(),
                message: e.to_string(),
            })?;
        self.backend.set(&self.key, &json)
    }

    /// Toggle `company_key`, persist the result, and return the new list.
    ///
    /// A failed write is logged and reported to the dispatcher; the returned
    /// list still reflects the toggle.
    pub fn toggle(&self, current: &Watchlist, company_key: &str) -> Watchlist {
        let next = current.toggle(company_key);
        if let Err(e) = self.save(&next) {
            tracing::warn!(key = %self.key, error = %e, "watchlist write failed");
            if let Some(dispatcher) = &self.dispatcher {
                dispatcher.emit_error(&ErrorEvent {
                    message: e.to_string(),
                    error_code: e.error_code().to_string(),
                });
            }
        }
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.emit_watchlist_changed(&WatchlistChangedEvent {
                company_key: company_key.to_string(),
                followed: next.contains(company_key),
                size: next.len(),
            });
        }
        next
    }
}

/// Decode a persisted JSON array of keys. Non-string elements are skipped.
fn decode(key: &str, raw: &str) -> Watchlist {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "watchlist is not valid JSON, starting empty");
            return Watchlist::new();
        }
    };
    let Some(items) = value.as_array() else {
        tracing::warn!(key = %key, "watchlist is not a JSON array, starting empty");
        return Watchlist::new();
    };
    let keys: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
    if keys.len() != items.len() {
        tracing::warn!(
            key = %key,
            dropped = items.len() - keys.len(),
            "watchlist held non-string entries"
        );
    }
    Watchlist::from_keys(keys)
}
