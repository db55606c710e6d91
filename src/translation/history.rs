/*!
 * Bounded, persisted translation history.
 *
 * The log keeps the 5 most recent translation records, newest first, and
 * persists the full serialized sequence after every change. The in-memory log
 * is the single source of truth for composing the next persisted value;
 * storage is durability only, read exactly once at construction.
 */

use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::storage::{keys, KeyValueStore};
use crate::translation::models::TranslationRecord;

/// Maximum number of records the history retains
pub const MAX_HISTORY: usize = 5;

/// Bounded, persisted log of translation records
///
/// All operations serialize through an internal async mutex held across the
/// whole read-compose-persist-commit cycle, so calls apply in the order they
/// were issued and a failed persistence write never changes the in-memory log.
pub struct HistoryStore {
    /// Durability layer
    store: Arc<dyn KeyValueStore>,
    /// In-memory log, newest-inserted first
    log: Arc<Mutex<Vec<TranslationRecord>>>,
}

impl HistoryStore {
    /// Construct the store, performing the startup load
    ///
    /// The load runs exactly once, before the handle exists, so no write can
    /// race it. An absent persisted entry is the normal empty-history state; a
    /// read or parse failure also resolves to empty (fail closed, never a
    /// crash) and is logged once.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let log = match store.get(keys::HISTORY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TranslationRecord>>(&raw) {
                Ok(mut records) => {
                    // Foreign oversized state still respects the capacity bound
                    records.truncate(MAX_HISTORY);
                    debug!("Loaded {} history record(s)", records.len());
                    records
                }
                Err(e) => {
                    warn!("Discarding unparseable history value: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load history, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            log: Arc::new(Mutex::new(log)),
        }
    }

    /// Prepend a record, evicting the oldest-inserted one beyond capacity
    ///
    /// All-or-nothing: when the persistence write fails the in-memory log is
    /// left untouched and the prior persisted value stays the source of truth.
    pub async fn add(&self, record: TranslationRecord) -> Result<()> {
        let mut log = self.log.lock().await;

        let mut next = Vec::with_capacity(log.len() + 1);
        next.push(record);
        next.extend(log.iter().cloned());
        next.truncate(MAX_HISTORY);

        self.persist(&next).await?;
        *log = next;

        Ok(())
    }

    /// List records sorted by creation time, most recent first
    ///
    /// Derived view over the insertion-ordered log. The sort is stable, so
    /// records whose timestamps collide at millisecond resolution keep
    /// insertion order, newest-inserted first.
    pub async fn list(&self) -> Vec<TranslationRecord> {
        let log = self.log.lock().await;

        let mut records = log.clone();
        records.sort_by_key(|r| std::cmp::Reverse(r.created_at));
        records
    }

    /// Remove the record with the given id
    ///
    /// Removing an unknown id persists the unchanged sequence and is not an
    /// error.
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut log = self.log.lock().await;

        let next: Vec<TranslationRecord> = log.iter().filter(|r| r.id != id).cloned().collect();

        self.persist(&next).await?;
        *log = next;

        Ok(())
    }

    /// Delete the persisted entry entirely and reset the in-memory log
    pub async fn clear(&self) -> Result<()> {
        let mut log = self.log.lock().await;

        self.store
            .remove(keys::HISTORY)
            .await
            .context("Failed to clear translation history")?;
        log.clear();

        debug!("Translation history cleared");
        Ok(())
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.log.lock().await.len()
    }

    /// Check whether the history is empty
    pub async fn is_empty(&self) -> bool {
        self.log.lock().await.is_empty()
    }

    /// Serialize and write the full sequence, replacing the prior value
    async fn persist(&self, records: &[TranslationRecord]) -> Result<()> {
        let json = serde_json::to_string(records)
            .context("Failed to serialize translation history")?;

        self.store
            .set(keys::HISTORY, &json)
            .await
            .context("Failed to persist translation history")?;

        Ok(())
    }
}

impl Clone for HistoryStore {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            log: self.log.clone(),
        }
    }
}
