use std::collections::HashMap;
use std::sync::Mutex;

/// Browser storage failure (quota exceeded, storage disabled, private mode...).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write rejected: {0}")]
    WriteRejected(String),
}

/// Synchronous key-value storage, shaped after `window.localStorage`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Counts mutations so callers can tell whether anything was written.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry, e.g. a cart saved by an earlier page load.
    pub fn with_entry(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.lock_entries().insert(key.to_string(), value.into());
        store
    }

    /// Number of `set` and `remove` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.lock_entries().get(key).cloned()
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn bump_writes(&self) {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.lock_entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.bump_writes();
        self.lock_entries().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.bump_writes();
        self.lock_entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_counts_writes() {
        let store = MemoryStore::with_entry("k", "v");
        assert_eq!(store.get("k").unwrap(), Some(b"v".to_vec()));
        assert_eq!(store.write_count(), 0);

        store.set("k", b"w").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.write_count(), 2);
        assert_eq!(store.get("k").unwrap(), None);
    }
}
