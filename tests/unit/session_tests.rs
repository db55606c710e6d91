/*!
 * Tests for the session manager and credential backend
 */

use std::sync::Arc;

use signspeak::session::{SessionManager, SessionState, StaticCredentials};
use signspeak::storage::{keys, MemoryStore};

fn manager_over(store: Arc<MemoryStore>) -> SessionManager {
    SessionManager::new(store, Arc::new(StaticCredentials::with_demo_accounts()))
}

#[tokio::test]
async fn test_login_withValidCredentials_shouldAuthenticateAndPersist() {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_over(store.clone());

    assert!(manager.login("test@test.com", "password").await.unwrap());
    assert!(manager.is_authenticated().await);

    // A fresh manager over the same storage restores the session
    let restarted = manager_over(store);
    let state = restarted.check_session().await;
    assert!(state.is_authenticated());
    assert_eq!(state.user().map(|u| u.email.as_str()), Some("test@test.com"));
}

#[tokio::test]
async fn test_login_withWrongPassword_shouldLeaveNoSession() {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_over(store.clone());

    assert!(!manager.login("test@test.com", "nope").await.unwrap());
    assert!(!manager.is_authenticated().await);
    assert!(store.raw_value(keys::USER).is_none());
    assert!(store.raw_value(keys::SESSION_TOKEN).is_none());
}

#[tokio::test]
async fn test_login_withUnknownEmail_shouldLeaveNoSession() {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_over(store);

    assert!(!manager.login("stranger@nowhere.com", "password").await.unwrap());
}

#[tokio::test]
async fn test_logout_shouldClearBothPersistedEntries() {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_over(store.clone());
    manager.login("demo@demo.com", "demo123").await.unwrap();

    manager.logout().await.unwrap();

    assert!(store.raw_value(keys::USER).is_none());
    assert!(store.raw_value(keys::SESSION_TOKEN).is_none());

    let state = manager_over(store).check_session().await;
    assert_eq!(state, SessionState::Anonymous);
}

#[tokio::test]
async fn test_checkSession_withNoPersistedState_shouldBeAnonymous() {
    let manager = manager_over(Arc::new(MemoryStore::new()));
    assert_eq!(manager.check_session().await, SessionState::Anonymous);
}

#[tokio::test]
async fn test_checkSession_withOnlyToken_shouldFailClosed() {
    let store = Arc::new(MemoryStore::new());
    store.seed(keys::SESSION_TOKEN, "orphan");

    let state = manager_over(store).check_session().await;

    assert_eq!(state, SessionState::Anonymous);
}

#[tokio::test]
async fn test_checkSession_withOnlyUser_shouldFailClosed() {
    let store = Arc::new(MemoryStore::new());
    store.seed(keys::USER, r#"{"id":"1","email":"a@b.c","display_name":"A"}"#);

    let state = manager_over(store).check_session().await;

    assert_eq!(state, SessionState::Anonymous);
}

#[tokio::test]
async fn test_checkSession_withCorruptUserRecord_shouldFailClosed() {
    let store = Arc::new(MemoryStore::new());
    store.seed(keys::USER, "{{{");
    store.seed(keys::SESSION_TOKEN, "token");

    let state = manager_over(store).check_session().await;

    assert_eq!(state, SessionState::Anonymous);
}

#[tokio::test]
async fn test_checkSession_withFailingReads_shouldFailClosedNotCrash() {
    let manager = manager_over(Arc::new(MemoryStore::failing_reads()));

    let state = manager.check_session().await;

    assert_eq!(state, SessionState::Anonymous);
}

#[tokio::test]
async fn test_login_withFailingWrites_shouldPersistNeitherHalf() {
    let store = Arc::new(MemoryStore::failing_writes());
    let manager = manager_over(store.clone());

    assert!(manager.login("test@test.com", "password").await.is_err());
    assert!(!manager.is_authenticated().await);
    assert!(store.raw_value(keys::USER).is_none());
    assert!(store.raw_value(keys::SESSION_TOKEN).is_none());
}

#[tokio::test]
async fn test_register_thenLogoutAndLogin_shouldRoundTrip() {
    let store = Arc::new(MemoryStore::new());
    let backend = Arc::new(StaticCredentials::with_demo_accounts());
    let manager = SessionManager::new(store.clone(), backend.clone());

    assert!(manager.register("fresh@user.com", "hunter2", "Fresh User").await.unwrap());
    manager.logout().await.unwrap();

    // The registered account joined the credential set checked by login
    let again = SessionManager::new(store, backend);
    assert!(again.login("fresh@user.com", "hunter2").await.unwrap());
    let user = again.current_user().await.expect("expected a user");
    assert_eq!(user.display_name, "Fresh User");
}

#[tokio::test]
async fn test_register_withExistingEmail_shouldReturnFalseWithoutStateChange() {
    let store = Arc::new(MemoryStore::new());
    let manager = manager_over(store.clone());

    assert!(!manager.register("demo@demo.com", "x", "Dup").await.unwrap());
    assert!(!manager.is_authenticated().await);
    assert!(store.raw_value(keys::USER).is_none());
}
