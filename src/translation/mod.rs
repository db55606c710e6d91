/*!
 * Phrase-to-gesture translation.
 *
 * This module contains the translation surface of the application:
 *
 * - `models`: data model for results and records
 * - `service`: the translate operation over the static lexicon
 * - `history`: the bounded, persisted history log
 */

// Re-export main types for easier usage
pub use self::history::{HistoryStore, MAX_HISTORY};
pub use self::models::{Language, TranslationRecord, TranslationResult};
pub use self::service::Translator;

// Submodules
pub mod history;
pub mod models;
pub mod service;
