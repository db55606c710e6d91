/*!
 * Session manager for authentication lifecycle.
 *
 * This module handles:
 * - Logging in against the credential backend
 * - Registering new accounts
 * - Logging out
 * - Restoring a persisted session at startup
 *
 * The persisted session is the {user record, token} pair. The pair is written
 * and cleared atomically - there is no state where one half exists without the
 * other.
 */

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::session::credentials::CredentialBackend;
use crate::session::models::{SessionState, UserProfile};
use crate::storage::{keys, KeyValueStore};

/// Session manager over a credential backend and the key-value store
pub struct SessionManager {
    /// Durability layer for the session pair
    store: Arc<dyn KeyValueStore>,
    /// Credential source
    backend: Arc<dyn CredentialBackend>,
    /// Current resolved state
    state: Arc<Mutex<SessionState>>,
}

impl SessionManager {
    /// Create a new session manager
    ///
    /// The manager starts anonymous; call `check_session` at startup to
    /// restore a persisted session.
    pub fn new(store: Arc<dyn KeyValueStore>, backend: Arc<dyn CredentialBackend>) -> Self {
        Self {
            store,
            backend,
            state: Arc::new(Mutex::new(SessionState::Anonymous)),
        }
    }

    /// Restore the persisted session, if any
    ///
    /// Authenticated only when both halves of the pair are present and the
    /// user record parses. Read failures, parse failures, and partial
    /// presence all resolve to anonymous (fail closed, never a crash).
    pub async fn check_session(&self) -> SessionState {
        let mut state = self.state.lock().await;

        let user_raw = match self.store.get(keys::USER).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Session check failed reading user record: {}", e);
                *state = SessionState::Anonymous;
                return state.clone();
            }
        };
        let token = match self.store.get(keys::SESSION_TOKEN).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Session check failed reading token: {}", e);
                *state = SessionState::Anonymous;
                return state.clone();
            }
        };

        *state = match (user_raw, token) {
            (Some(user_json), Some(token)) => match serde_json::from_str::<UserProfile>(&user_json) {
                Ok(user) => {
                    debug!("Restored session for {}", user.email);
                    SessionState::Authenticated { user, token }
                }
                Err(e) => {
                    warn!("Discarding unparseable user record: {}", e);
                    SessionState::Anonymous
                }
            },
            (None, None) => SessionState::Anonymous,
            _ => {
                warn!("Partial session pair found, resolving to anonymous");
                SessionState::Anonymous
            }
        };

        state.clone()
    }

    /// Log in with an email/password pair
    ///
    /// # Returns
    /// * `Ok(false)` on a credential mismatch - no state changes
    /// * `Ok(true)` once the session pair is persisted and in effect
    pub async fn login(&self, email: &str, password: &str) -> Result<bool> {
        let user = match self.backend.verify_credentials(email, password).await? {
            Some(user) => user,
            None => {
                debug!("Login rejected for {}", email);
                return Ok(false);
            }
        };

        let mut state = self.state.lock().await;
        let token = self.persist_session(&user).await?;
        *state = SessionState::Authenticated { user: user.clone(), token };

        info!("Logged in as {}", user.email);
        Ok(true)
    }

    /// Register a new account and start a session for it
    ///
    /// # Returns
    /// * `Ok(false)` when the email is already taken - no state changes
    /// * `Ok(true)` once the account exists and the session pair is persisted
    pub async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<bool> {
        let user = match self.backend.create_account(email, password, display_name).await? {
            Some(user) => user,
            None => {
                debug!("Registration rejected, email already known: {}", email);
                return Ok(false);
            }
        };

        let mut state = self.state.lock().await;
        let token = self.persist_session(&user).await?;
        *state = SessionState::Authenticated { user: user.clone(), token };

        info!("Registered and logged in as {}", user.email);
        Ok(true)
    }

    /// Log out, clearing both persisted entries
    ///
    /// The pair is removed atomically: both or neither. The in-memory state
    /// only transitions once the removal succeeded.
    pub async fn logout(&self) -> Result<()> {
        let mut state = self.state.lock().await;

        self.store
            .remove_many(&[keys::USER, keys::SESSION_TOKEN])
            .await
            .context("Failed to clear persisted session")?;
        *state = SessionState::Anonymous;

        info!("Logged out");
        Ok(())
    }

    /// Get the current user, if authenticated
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.state.lock().await.user().cloned()
    }

    /// Check whether a session is currently in effect
    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.is_authenticated()
    }

    /// Write the session pair atomically, returning the minted token
    async fn persist_session(&self, user: &UserProfile) -> Result<String> {
        let user_json =
            serde_json::to_string(user).context("Failed to serialize user record")?;
        let token = Uuid::new_v4().to_string();

        self.store
            .set_many(&[(keys::USER, user_json.as_str()), (keys::SESSION_TOKEN, token.as_str())])
            .await
            .context("Failed to persist session pair")?;

        Ok(token)
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            backend: self.backend.clone(),
            state: self.state.clone(),
        }
    }
}
