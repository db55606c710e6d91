/*!
 * Tests for the preference store
 */

use std::sync::Arc;

use signspeak::preferences::{ColorScheme, PreferenceStore};
use signspeak::storage::{keys, MemoryStore};

#[tokio::test]
async fn test_colorScheme_unset_shouldDefaultToLight() {
    let prefs = PreferenceStore::new(Arc::new(MemoryStore::new()));
    assert_eq!(prefs.color_scheme().await, ColorScheme::Light);
}

#[tokio::test]
async fn test_setColorScheme_shouldPersistAcrossInstances() {
    let store = Arc::new(MemoryStore::new());

    PreferenceStore::new(store.clone())
        .set_color_scheme(ColorScheme::Dark)
        .await
        .unwrap();

    let fresh = PreferenceStore::new(store);
    assert_eq!(fresh.color_scheme().await, ColorScheme::Dark);
}

#[tokio::test]
async fn test_colorScheme_withCorruptPersistedValue_shouldFallBack() {
    let store = Arc::new(MemoryStore::new());
    store.seed(keys::COLOR_SCHEME, "hotdog-stand");

    let prefs = PreferenceStore::new(store);

    assert_eq!(prefs.color_scheme().await, ColorScheme::Light);
}

#[tokio::test]
async fn test_colorScheme_withFailingReads_shouldFallBackNotCrash() {
    let prefs = PreferenceStore::new(Arc::new(MemoryStore::failing_reads()));
    assert_eq!(prefs.color_scheme().await, ColorScheme::Light);
}

#[tokio::test]
async fn test_toggle_shouldAlternateSchemes() {
    let prefs = PreferenceStore::new(Arc::new(MemoryStore::new()));

    assert_eq!(prefs.toggle_color_scheme().await.unwrap(), ColorScheme::Dark);
    assert_eq!(prefs.toggle_color_scheme().await.unwrap(), ColorScheme::Light);
    assert_eq!(prefs.toggle_color_scheme().await.unwrap(), ColorScheme::Dark);
}

#[tokio::test]
async fn test_setColorScheme_withFailingWrites_shouldSurfaceError() {
    let prefs = PreferenceStore::new(Arc::new(MemoryStore::failing_writes()));
    assert!(prefs.set_color_scheme(ColorScheme::Dark).await.is_err());
}
