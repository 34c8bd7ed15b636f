//! In-memory key-value store.
//!
//! Session-only stand-in used when durable storage cannot be opened, and by
//! unit tests that do not need a database. Nothing written here survives
//! the process.

use crate::store::KeyValueStore;
use std::collections::HashMap;

/// Volatile [`KeyValueStore`] over a plain map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
