/*!
 * Application controller.
 *
 * The controller is constructed once at startup and owns the store handles;
 * callers reach the stores through it instead of through process-wide
 * singletons. It also composes the translate-then-record pair so the two
 * appear atomic to the UI.
 */

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::app_config::Config;
use crate::preferences::PreferenceStore;
use crate::session::{SessionManager, StaticCredentials};
use crate::storage::{KeyValueStore, SqliteStore};
use crate::translation::{HistoryStore, Language, TranslationRecord, Translator};

/// Main application controller
pub struct Controller {
    /// App configuration
    config: Config,
    /// Phrase translator
    translator: Translator,
    /// Translation history store
    history: HistoryStore,
    /// Authentication session manager
    session: SessionManager,
    /// Display preference store
    preferences: PreferenceStore,
}

impl Controller {
    /// Create a controller backed by the configured SQLite store
    ///
    /// Restores any persisted session as part of startup.
    pub async fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.storage.database_path {
            Some(path) => Arc::new(SqliteStore::new(path).context("Failed to open storage")?),
            None => Arc::new(SqliteStore::new_default().context("Failed to open storage")?),
        };

        Self::with_store(config, store).await
    }

    /// Create a controller over an explicit key-value store
    pub async fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        config.validate()?;

        let translator = Translator::with_latency_ms(config.translation.simulated_latency_ms);
        let history = HistoryStore::load(store.clone()).await;
        let session = SessionManager::new(store.clone(), Arc::new(StaticCredentials::with_demo_accounts()));
        let preferences = PreferenceStore::new(store);

        session.check_session().await;

        Ok(Self {
            config,
            translator,
            history,
            session,
            preferences,
        })
    }

    /// Translate a phrase and record it in the history
    ///
    /// Empty or whitespace-only input is a validation failure surfaced as
    /// `Ok(None)`; nothing is recorded. Otherwise the record is appended to
    /// the history before this returns, so the translate/record pair appears
    /// atomic to the caller. A failed history write surfaces here and the
    /// record is not considered produced.
    pub async fn translate(
        &self,
        text: &str,
        language: Option<Language>,
    ) -> Result<Option<TranslationRecord>> {
        if text.trim().is_empty() {
            debug!("Rejecting empty translation input");
            return Ok(None);
        }

        let language = language.unwrap_or(self.config.default_language);
        let record = self.translator.translate(text, language).await;

        self.history.add(record.clone()).await?;

        Ok(Some(record))
    }

    /// Get the app configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the translation history store
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Get the session manager
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Get the preference store
    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }
}
