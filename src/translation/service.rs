/*!
 * Translate operation.
 *
 * Normalizes the input, queries the static lexicon, and falls back to the
 * placeholder rendering on a miss. A miss is a normal outcome - translate
 * always succeeds. The operation has no side effects; appending the record to
 * the history store is the caller's job.
 */

use log::debug;
use std::time::Duration;

use crate::lexicon;
use crate::translation::models::{Language, TranslationRecord, TranslationResult};

/// Phrase-to-gesture translator over the static lexicon
#[derive(Debug, Clone)]
pub struct Translator {
    /// Cosmetic delay applied before answering, simulating a remote call
    simulated_latency: Duration,
}

impl Translator {
    /// Create a translator that answers immediately
    pub fn new() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
        }
    }

    /// Create a translator with a cosmetic response delay
    pub fn with_latency_ms(latency_ms: u64) -> Self {
        Self {
            simulated_latency: Duration::from_millis(latency_ms),
        }
    }

    /// Translate a phrase into its gesture rendering
    ///
    /// Lookup is exact-match over the normalized (lowercased, trimmed) text.
    /// On a miss the record carries the fallback rendering. Each call produces
    /// a record with a fresh unique id and the current timestamp.
    pub async fn translate(&self, text: &str, language: Language) -> TranslationRecord {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        let result = match lexicon::lookup(text) {
            Some(hit) => {
                debug!("Lexicon hit for '{}' ({})", lexicon::normalize(text), language);
                hit.clone()
            }
            None => {
                debug!("Lexicon miss for '{}' ({})", lexicon::normalize(text), language);
                TranslationResult::fallback()
            }
        };

        TranslationRecord::new(text, language, result)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
