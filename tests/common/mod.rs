/*!
 * Common test utilities for the signspeak test suite
 */

#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use signspeak::storage::MemoryStore;
use signspeak::translation::{Language, TranslationRecord, TranslationResult};

/// Creates a temporary directory for test databases
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a shared in-memory key-value store
pub fn create_memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Creates a translation record with the fallback result
pub fn create_test_record(text: &str) -> TranslationRecord {
    TranslationRecord::new(text, Language::En, TranslationResult::fallback())
}

/// Creates a translation record with an explicit timestamp
pub fn create_test_record_at(text: &str, created_at: i64) -> TranslationRecord {
    let mut record = create_test_record(text);
    record.created_at = created_at;
    record
}
