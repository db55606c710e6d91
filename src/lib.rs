/*!
 * # signspeak
 *
 * A Rust library for translating short phrases into sign-language gesture
 * descriptions.
 *
 * ## Features
 *
 * - Static phrase lexicon with French and English starter vocabularies
 * - Fallback rendering for phrases outside the lexicon (a miss is never an error)
 * - Bounded translation history (5 most recent, most-recent-first) persisted locally
 * - Mock authentication with a persisted session pair
 * - Persisted color-scheme preference
 * - SQLite-backed key-value storage behind a swappable trait
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `lexicon`: Static phrase-to-gesture table
 * - `translation`: Translate operation and history:
 *   - `translation::models`: Data model for results and records
 *   - `translation::service`: The translate operation
 *   - `translation::history`: The bounded, persisted history log
 * - `session`: Mock authentication sessions
 * - `preferences`: Persisted display preferences
 * - `storage`: Local key-value persistence
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod lexicon;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, StorageError};
pub use preferences::{ColorScheme, PreferenceStore};
pub use session::{SessionManager, SessionState, UserProfile};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use translation::{HistoryStore, Language, TranslationRecord, TranslationResult, Translator, MAX_HISTORY};
