/*!
 * Mock authentication sessions.
 *
 * This module contains the session surface of the application:
 *
 * - `models`: user profile and resolved session state
 * - `credentials`: the credential backend seam and its in-memory implementation
 * - `manager`: login/register/logout/check_session over the key-value store
 */

// Re-export main types for easier usage
pub use self::credentials::{CredentialBackend, StaticCredentials};
pub use self::manager::SessionManager;
pub use self::models::{SessionState, UserProfile};

// Submodules
pub mod credentials;
pub mod manager;
pub mod models;
