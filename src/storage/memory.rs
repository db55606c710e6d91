/*!
 * In-memory key-value store with injectable failure modes.
 *
 * This store backs tests that need to exercise failure paths:
 * - `MemoryStore::new()` - always succeeds, plain HashMap persistence
 * - `MemoryStore::failing_writes()` - reads succeed, every write/delete fails
 * - `MemoryStore::failing_reads()` - writes succeed, every read fails
 * - `MemoryStore::fail_after(n)` - first n operations succeed, the rest fail
 */

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::StorageError;
use crate::storage::KeyValueStore;

/// Failure behavior for the in-memory store
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailureMode {
    /// All operations succeed
    None,
    /// Every write and delete fails; reads succeed
    Writes,
    /// Every read fails; writes succeed
    Reads,
    /// The first n operations succeed, every later one fails
    AfterCount {
        /// Number of operations that succeed before failures start
        succeed: usize,
    },
}

/// In-memory implementation of `KeyValueStore`
#[derive(Debug)]
pub struct MemoryStore {
    /// Entry storage shared across clones
    entries: Arc<RwLock<HashMap<String, String>>>,
    /// Failure behavior
    mode: FailureMode,
    /// Operation counter for AfterCount mode
    op_count: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Create a store that always succeeds
    pub fn new() -> Self {
        Self::with_mode(FailureMode::None)
    }

    /// Create a store with the specified failure mode
    pub fn with_mode(mode: FailureMode) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            mode,
            op_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a store whose writes and deletes always fail
    pub fn failing_writes() -> Self {
        Self::with_mode(FailureMode::Writes)
    }

    /// Create a store whose reads always fail
    pub fn failing_reads() -> Self {
        Self::with_mode(FailureMode::Reads)
    }

    /// Create a store that fails every operation after the first `succeed`
    pub fn fail_after(succeed: usize) -> Self {
        Self::with_mode(FailureMode::AfterCount { succeed })
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Snapshot the raw value stored under `key`, bypassing failure modes
    ///
    /// Test helper for asserting on persisted state.
    pub fn raw_value(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Seed a raw value directly, bypassing failure modes
    ///
    /// Test helper for simulating pre-existing (possibly corrupt) persisted state.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_string(), value.to_string());
    }

    fn should_fail(&self, is_read: bool) -> bool {
        let count = self.op_count.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            FailureMode::None => false,
            FailureMode::Writes => !is_read,
            FailureMode::Reads => is_read,
            FailureMode::AfterCount { succeed } => count >= succeed,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            mode: self.mode,
            op_count: self.op_count.clone(),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.should_fail(true) {
            return Err(StorageError::ReadFailed {
                key: key.to_string(),
                message: "simulated read failure".to_string(),
            });
        }

        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.should_fail(false) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                message: "simulated write failure".to_string(),
            });
        }

        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.should_fail(false) {
            return Err(StorageError::DeleteFailed {
                key: key.to_string(),
                message: "simulated delete failure".to_string(),
            });
        }

        self.entries.write().remove(key);
        Ok(())
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        if self.should_fail(false) {
            return Err(StorageError::WriteFailed {
                key: entries.first().map(|(k, _)| k.to_string()).unwrap_or_default(),
                message: "simulated write failure".to_string(),
            });
        }

        // Single write-lock scope keeps the batch atomic
        let mut guard = self.entries.write();
        for (key, value) in entries {
            guard.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        if self.should_fail(false) {
            return Err(StorageError::DeleteFailed {
                key: keys.first().map(|k| k.to_string()).unwrap_or_default(),
                message: "simulated delete failure".to_string(),
            });
        }

        let mut guard = self.entries.write();
        for key in keys {
            guard.remove(*key);
        }
        Ok(())
    }
}
