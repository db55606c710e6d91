/*!
 * SQLite-backed key-value store.
 *
 * This module implements `KeyValueStore` on top of a single-table SQLite
 * database. The connection is wrapped in Arc<Mutex> and every operation runs
 * through tokio's spawn_blocking so async callers never block the runtime.
 */

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::errors::StorageError;
use crate::storage::KeyValueStore;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Default database filename
const DEFAULT_DB_FILENAME: &str = "signspeak.db";

/// Default database directory name under the user's data directory
const DEFAULT_DB_DIRNAME: &str = "signspeak";

/// SQLite key-value store with thread-safe access
#[derive(Clone)]
pub struct SqliteStore {
    /// Path to the database file
    db_path: PathBuf,
    /// Thread-safe connection wrapped in Arc<Mutex>
    connection: Arc<Mutex<Connection>>,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("db_path", &self.db_path)
            .finish()
    }
}

impl SqliteStore {
    /// Open the store at the default location under the platform data directory
    pub fn new_default() -> Result<Self> {
        let db_path = Self::default_database_path()?;
        Self::new(&db_path)
    }

    /// Open the store at the specified path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create storage directory: {:?}", parent))?;
        }

        info!("Opening storage at: {:?}", db_path);

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open storage database: {:?}", db_path))?;

        initialize_schema(&conn)?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an in-memory store (for testing)
    pub fn new_in_memory() -> Result<Self> {
        debug!("Creating in-memory storage");

        let conn = Connection::open_in_memory().context("Failed to create in-memory storage")?;

        initialize_schema(&conn)?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Get the default database path
    pub fn default_database_path() -> Result<PathBuf> {
        let base_dir = dirs::data_local_dir()
            .or_else(dirs::data_dir)
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;

        Ok(base_dir.join(DEFAULT_DB_DIRNAME).join(DEFAULT_DB_FILENAME))
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Execute a database operation asynchronously using spawn_blocking
    async fn execute_async<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StorageError::Unavailable(format!("storage lock poisoned: {}", e)))?;

            f(&conn).map_err(|e| StorageError::Unavailable(e.to_string()))
        })
        .await
        .map_err(|e| StorageError::Unavailable(format!("storage task panicked: {}", e)))?
    }

    /// Execute several statements in one transaction
    async fn transaction_async<F>(&self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&rusqlite::Transaction) -> rusqlite::Result<()> + Send + 'static,
    {
        let conn = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = conn
                .lock()
                .map_err(|e| StorageError::Unavailable(format!("storage lock poisoned: {}", e)))?;

            let tx = conn
                .transaction()
                .map_err(|e| StorageError::Unavailable(e.to_string()))?;
            f(&tx).map_err(|e| StorageError::Unavailable(e.to_string()))?;
            tx.commit()
                .map_err(|e| StorageError::Unavailable(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| StorageError::Unavailable(format!("storage task panicked: {}", e)))?
    }

    /// Number of entries currently stored
    pub async fn len(&self) -> Result<usize, StorageError> {
        let count: i64 = self
            .execute_async(|conn| conn.query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0)))
            .await?;
        Ok(count as usize)
    }

    /// Check whether the store holds no entries
    pub async fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let owned_key = key.to_string();

        self.execute_async(move |conn| {
            conn.query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                [&owned_key],
                |row| row.get(0),
            )
            .optional()
        })
        .await
        .map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let owned_key = key.to_string();
        let owned_value = value.to_string();

        self.execute_async(move |conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
                params![owned_key, owned_value],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| StorageError::WriteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let owned_key = key.to_string();

        self.execute_async(move |conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", [&owned_key])?;
            Ok(())
        })
        .await
        .map_err(|e| StorageError::DeleteFailed {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    async fn set_many(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let owned: Vec<(String, String)> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let first_key = entries.first().map(|(k, _)| k.to_string()).unwrap_or_default();

        self.transaction_async(move |tx| {
            for (key, value) in &owned {
                tx.execute(
                    "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
                     ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
                    params![key, value],
                )?;
            }
            Ok(())
        })
        .await
        .map_err(|e| StorageError::WriteFailed {
            key: first_key,
            message: e.to_string(),
        })
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        let owned: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let first_key = keys.first().map(|k| k.to_string()).unwrap_or_default();

        self.transaction_async(move |tx| {
            for key in &owned {
                tx.execute("DELETE FROM kv_entries WHERE key = ?1", [key])?;
            }
            Ok(())
        })
        .await
        .map_err(|e| StorageError::DeleteFailed {
            key: first_key,
            message: e.to_string(),
        })
    }
}

/// Initialize the database schema
fn initialize_schema(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        info!("Initializing storage schema v{}", SCHEMA_VERSION);
        create_all_tables(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if current_version < SCHEMA_VERSION {
        return Err(anyhow::anyhow!(
            "Unknown storage schema version: {}. Cannot migrate.",
            current_version
        ));
    } else {
        debug!("Storage schema is up to date (v{})", current_version);
    }

    Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
            [],
            |row| row.get(0),
        )
        .context("Failed to check schema_version table existence")?;

    if !table_exists {
        return Ok(0);
    }

    let version: i32 = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| row.get(0))
        .unwrap_or(0);

    Ok(version)
}

/// Set the schema version in the database
fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version, updated_at) VALUES (1, ?1, datetime('now'))",
        [version],
    )?;
    Ok(())
}

/// Create all database tables
fn create_all_tables(conn: &Connection) -> Result<()> {
    // WAL mode for crash recovery; the pragma answers with the effective mode
    let _mode: String = conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS kv_entries (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    info!("Storage schema created successfully");
    Ok(())
}
