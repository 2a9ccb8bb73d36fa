//! In-process key-value adapter.
//!
//! Backs tests and the smoke CLI; same contract as the durable adapter,
//! no durability.

use crate::storage::{KeyValueStore, StorageResult};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Volatile adapter over a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
