//! In-process state backend, for tests and hosts that persist elsewhere.

use std::sync::Mutex;

use rustc_hash::FxHashMap;
use workpulse_core::errors::StorageError;

use super::StateBackend;

#[derive(Debug, Default)]
pub struct MemoryStateBackend {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryStateBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateBackend for MemoryStateBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::LockPoisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
