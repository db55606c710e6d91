/*!
 * Translation data model.
 *
 * These structures are what the stores persist and the UI renders: the gesture
 * rendering of a phrase, and the identified, timestamped record of one translate
 * call.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Input language of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// French
    Fr,
    /// English
    En,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Fr => write!(f, "fr"),
            Language::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            _ => Err(anyhow::anyhow!("Invalid language code: {}", s)),
        }
    }
}

/// Gesture rendering of a phrase
///
/// Immutable once constructed. A lookup miss produces the fallback rendering,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// Short emoji glyph summarizing the gesture
    pub emoji: String,
    /// Human-readable description of the gesture
    pub description: String,
    /// Ordered gesture steps, when the lexicon provides them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gestures: Option<Vec<String>>,
}

impl TranslationResult {
    /// Create a result with gesture steps
    pub fn new(emoji: &str, description: &str, gestures: &[&str]) -> Self {
        Self {
            emoji: emoji.to_string(),
            description: description.to_string(),
            gestures: Some(gestures.iter().map(|g| g.to_string()).collect()),
        }
    }

    /// Placeholder rendering returned on a lookup miss
    pub fn fallback() -> Self {
        Self {
            emoji: "🤷".to_string(),
            description: "translation not found".to_string(),
            gestures: Some(vec!["No gesture available for this text".to_string()]),
        }
    }

    /// Check whether this is the lookup-miss placeholder
    pub fn is_fallback(&self) -> bool {
        self.description == "translation not found"
    }
}

/// Identified, timestamped record of one translate call
///
/// Never mutated after creation; destroyed only by explicit removal or a full
/// history clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Unique record identifier
    pub id: String,
    /// The input text exactly as the caller supplied it
    pub input_text: String,
    /// Language the input was submitted in
    pub language: Language,
    /// Gesture rendering for the input
    pub result: TranslationResult,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,
}

impl TranslationRecord {
    /// Create a new record with a fresh id and the current timestamp
    pub fn new(input_text: &str, language: Language, result: TranslationResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            input_text: input_text.to_string(),
            language,
            result,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
