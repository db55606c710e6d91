/*!
 * Credential backend.
 *
 * The session manager talks to credentials through the `CredentialBackend`
 * trait so a real authentication service can be substituted without touching
 * the session logic. The shipped implementation is an in-memory account set
 * seeded with the demo accounts.
 */

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::fmt::Debug;
use std::sync::Arc;
use uuid::Uuid;

use crate::session::models::UserProfile;

/// Stored account in the credential backend
#[derive(Debug, Clone)]
struct AccountRecord {
    /// Unique account identifier
    id: String,
    /// Account email, the uniqueness key
    email: String,
    /// SHA-256 hex digest of the password
    password_hash: String,
    /// Name shown in the UI
    display_name: String,
}

impl AccountRecord {
    fn profile(&self) -> UserProfile {
        UserProfile::new(&self.id, &self.email, &self.display_name)
    }
}

/// Capability interface over a credential source
#[async_trait]
pub trait CredentialBackend: Send + Sync + Debug {
    /// Verify an email/password pair
    ///
    /// # Returns
    /// * `Ok(Some(profile))` on a match, `Ok(None)` on a mismatch - a mismatch
    ///   is an expected outcome, not an error
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<UserProfile>>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(None)` when the email is already taken
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Option<UserProfile>>;
}

/// In-memory credential set standing in for a real backend
///
/// Accounts created through `create_account` join the same set that
/// `verify_credentials` checks, so register-then-login round trips work.
#[derive(Debug)]
pub struct StaticCredentials {
    /// Account storage shared across clones
    accounts: Arc<RwLock<Vec<AccountRecord>>>,
}

impl StaticCredentials {
    /// Create an empty credential set
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create the credential set seeded with the two demo accounts
    pub fn with_demo_accounts() -> Self {
        let backend = Self::new();
        {
            let mut accounts = backend.accounts.write();
            accounts.push(AccountRecord {
                id: "1".to_string(),
                email: "test@test.com".to_string(),
                password_hash: hash_password("password"),
                display_name: "Test User".to_string(),
            });
            accounts.push(AccountRecord {
                id: "2".to_string(),
                email: "demo@demo.com".to_string(),
                password_hash: hash_password("demo123"),
                display_name: "Demo User".to_string(),
            });
        }
        backend
    }

    /// Number of accounts currently known
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    /// Check whether no accounts are known
    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::with_demo_accounts()
    }
}

impl Clone for StaticCredentials {
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
        }
    }
}

#[async_trait]
impl CredentialBackend for StaticCredentials {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<UserProfile>> {
        let candidate_hash = hash_password(password);
        let accounts = self.accounts.read();

        Ok(accounts
            .iter()
            .find(|a| a.email == email && a.password_hash == candidate_hash)
            .map(AccountRecord::profile))
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Option<UserProfile>> {
        let mut accounts = self.accounts.write();

        if accounts.iter().any(|a| a.email == email) {
            return Ok(None);
        }

        let account = AccountRecord {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash: hash_password(password),
            display_name: display_name.to_string(),
        };
        let profile = account.profile();
        accounts.push(account);

        Ok(Some(profile))
    }
}

/// SHA-256 hex digest of a password
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
