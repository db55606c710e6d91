/*!
 * Full app lifecycle tests: controller wiring and restart round trips over
 * an on-disk store
 */

use std::path::Path;
use std::sync::Arc;

use signspeak::app_config::Config;
use signspeak::preferences::ColorScheme;
use signspeak::storage::SqliteStore;
use signspeak::translation::{Language, MAX_HISTORY};
use signspeak::Controller;

use crate::common::create_temp_dir;

fn config_with_db(path: &Path) -> Config {
    let mut config = Config::default();
    config.storage.database_path = Some(path.to_path_buf());
    config
}

async fn controller_at(path: &Path) -> Controller {
    Controller::new(config_with_db(path))
        .await
        .expect("Failed to build controller")
}

#[tokio::test]
async fn test_history_shouldSurviveRestart() {
    let dir = create_temp_dir().unwrap();
    let db_path = dir.path().join("app.db");

    let mut expected_ids = Vec::new();
    {
        let controller = controller_at(&db_path).await;
        for phrase in ["bonjour", "merci", "hello"] {
            let record = controller
                .translate(phrase, Some(Language::Fr))
                .await
                .unwrap()
                .expect("expected a record");
            expected_ids.push(record.id);
        }
    }

    // Simulated restart: fresh controller over the same database file
    let restarted = controller_at(&db_path).await;
    let records = restarted.history().list().await;

    assert_eq!(records.len(), expected_ids.len());
    for id in &expected_ids {
        assert!(records.iter().any(|r| &r.id == id), "missing record {}", id);
    }
    assert!(records.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn test_historyBound_shouldHoldAcrossRestarts() {
    let dir = create_temp_dir().unwrap();
    let db_path = dir.path().join("app.db");

    {
        let controller = controller_at(&db_path).await;
        for i in 0..4 {
            controller.translate(&format!("phrase {}", i), None).await.unwrap();
        }
    }
    {
        let controller = controller_at(&db_path).await;
        for i in 4..9 {
            controller.translate(&format!("phrase {}", i), None).await.unwrap();
        }
        assert_eq!(controller.history().len().await, MAX_HISTORY);
    }

    let restarted = controller_at(&db_path).await;
    assert_eq!(restarted.history().list().await.len(), MAX_HISTORY);
}

#[tokio::test]
async fn test_session_shouldSurviveRestartUntilLogout() {
    let dir = create_temp_dir().unwrap();
    let db_path = dir.path().join("app.db");

    {
        let controller = controller_at(&db_path).await;
        assert!(controller.session().login("demo@demo.com", "demo123").await.unwrap());
    }

    {
        let restarted = controller_at(&db_path).await;
        let state = restarted.session().check_session().await;
        assert!(state.is_authenticated());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("2"));

        restarted.session().logout().await.unwrap();
    }

    let after_logout = controller_at(&db_path).await;
    assert!(!after_logout.session().check_session().await.is_authenticated());
}

#[tokio::test]
async fn test_colorScheme_shouldSurviveRestart() {
    let dir = create_temp_dir().unwrap();
    let db_path = dir.path().join("app.db");

    {
        let controller = controller_at(&db_path).await;
        controller.preferences().set_color_scheme(ColorScheme::Dark).await.unwrap();
    }

    let restarted = controller_at(&db_path).await;
    assert_eq!(restarted.preferences().color_scheme().await, ColorScheme::Dark);
}

#[tokio::test]
async fn test_clear_thenRestart_shouldStayEmpty() {
    let dir = create_temp_dir().unwrap();
    let db_path = dir.path().join("app.db");

    {
        let controller = controller_at(&db_path).await;
        controller.translate("bonjour", None).await.unwrap();
        controller.history().clear().await.unwrap();
    }

    let restarted = controller_at(&db_path).await;
    assert!(restarted.history().is_empty().await);
}

#[tokio::test]
async fn test_sharedStore_allStoresCoexistWithoutKeyCollisions() {
    let store = Arc::new(SqliteStore::new_in_memory().unwrap());
    let controller = Controller::with_store(Config::default(), store)
        .await
        .unwrap();

    controller.translate("hello", Some(Language::En)).await.unwrap();
    controller.session().login("test@test.com", "password").await.unwrap();
    controller.preferences().set_color_scheme(ColorScheme::Dark).await.unwrap();

    assert_eq!(controller.history().len().await, 1);
    assert!(controller.session().is_authenticated().await);
    assert_eq!(controller.preferences().color_scheme().await, ColorScheme::Dark);
}
