/*!
 * Session data model.
 *
 * The persisted session is a pair of independent entries - the user record and
 * an opaque token - that are only ever written or cleared together.
 */

use serde::{Deserialize, Serialize};

/// Authenticated user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: String,
    /// Account email
    pub email: String,
    /// Name shown in the UI
    pub display_name: String,
}

impl UserProfile {
    /// Create a new profile
    pub fn new(id: &str, email: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            email: email.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Resolved authentication state
///
/// `Authenticated` means both halves of the session pair were present and the
/// user record parsed; everything else resolves to `Anonymous` (fail closed).
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// A valid persisted session exists
    Authenticated {
        /// The persisted user record
        user: UserProfile,
        /// The opaque session token
        token: String,
    },
    /// No session, or a partial or corrupt one
    Anonymous,
}

impl SessionState {
    /// Check whether this state carries a valid session
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    /// Get the user profile, if authenticated
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            SessionState::Anonymous => None,
        }
    }
}
