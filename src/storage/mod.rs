/*!
 * Local key-value persistence.
 *
 * Every store in the application persists through the `KeyValueStore` trait:
 * string-keyed get/set/remove of serialized text blobs, plus atomic multi-key
 * variants for state that must land together (the session pair). Two
 * implementations are provided:
 * - `sqlite`: the production store, a single-table SQLite database
 * - `memory`: an in-memory store with injectable failure modes for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::StorageError;

/// Fixed key namespace used by the application stores.
pub mod keys {
    /// Serialized translation history log
    pub const HISTORY: &str = "translations";

    /// User record half of the session pair
    pub const USER: &str = "user";

    /// Token half of the session pair
    pub const SESSION_TOKEN: &str = "token";

    /// Preferred color scheme
    pub const COLOR_SCHEME: &str = "color_scheme";
}

/// Common trait for local key-value persistence
///
/// This is the seam between the stores and their durability layer. Values are
/// opaque text blobs; serialization is the caller's concern.
#[async_trait]
pub trait KeyValueStore: Send + Sync + Debug {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// * `Ok(None)` when the key has never been written or was removed
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any prior value
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`
    ///
    /// Removing an absent key is a no-op, not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Write several entries atomically: either all land or none do
    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Remove several keys atomically
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError>;
}

pub mod memory;
pub mod sqlite;

// Re-export main types
pub use memory::{FailureMode, MemoryStore};
pub use sqlite::SqliteStore;
