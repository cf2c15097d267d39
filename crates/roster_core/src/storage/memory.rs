//! In-memory state store adapter.
//!
//! Used by tests and ephemeral sessions that do not outlive the process.

use super::{StateStore, StorageResult};
use std::collections::BTreeMap;

/// Volatile map-backed state store.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-seeded with one key, for load-path tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStateStore;
    use crate::storage::StateStore;

    #[test]
    fn overwrites_keep_the_last_value() {
        let mut store = MemoryStateStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
