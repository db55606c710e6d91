/*!
 * Static phrase lexicon.
 *
 * Maps normalized phrases to their gesture renderings. The table is fixed at
 * build time and covers the French and English starter vocabulary; anything
 * outside it falls back to the placeholder result at the service layer.
 */

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::translation::models::TranslationResult;

/// Phrase table keyed by normalized text
static LEXICON: Lazy<HashMap<&'static str, TranslationResult>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // French
    map.insert(
        "bonjour",
        TranslationResult::new("👋", "Geste de salutation", &["Lever la main", "Mouvement de gauche à droite"]),
    );
    map.insert(
        "merci",
        TranslationResult::new("🙏", "Geste de remerciement", &["Joindre les mains", "Incliner légèrement"]),
    );
    map.insert(
        "au revoir",
        TranslationResult::new("👋", "Geste d'adieu", &["Lever la main", "Mouvement d'adieu"]),
    );
    map.insert(
        "oui",
        TranslationResult::new("👍", "Acquiescement", &["Hocher la tête vers le bas"]),
    );
    map.insert(
        "non",
        TranslationResult::new("👎", "Négation", &["Secouer la tête de gauche à droite"]),
    );
    map.insert(
        "je t'aime",
        TranslationResult::new("❤️", "Expression d'amour", &["Main sur le cœur", "Pointer vers la personne"]),
    );
    map.insert(
        "eau",
        TranslationResult::new("💧", "Demande d'eau", &["Mime de boire", "Geste de verser"]),
    );
    map.insert(
        "manger",
        TranslationResult::new("🍽️", "Action de manger", &["Main vers la bouche", "Mouvement de mastication"]),
    );
    map.insert(
        "dormir",
        TranslationResult::new("😴", "Action de dormir", &["Mains jointes sous la joue", "Fermer les yeux"]),
    );
    map.insert(
        "aide",
        TranslationResult::new("🆘", "Demande d'aide", &["Mains tendues", "Expression inquiète"]),
    );

    // English
    map.insert(
        "hello",
        TranslationResult::new("👋", "Greeting gesture", &["Raise hand", "Wave left to right"]),
    );
    map.insert(
        "thank you",
        TranslationResult::new("🙏", "Thank you gesture", &["Join hands", "Slight bow"]),
    );
    map.insert(
        "goodbye",
        TranslationResult::new("👋", "Farewell gesture", &["Raise hand", "Waving motion"]),
    );
    map.insert(
        "yes",
        TranslationResult::new("👍", "Affirmation", &["Nod head down"]),
    );
    map.insert(
        "no",
        TranslationResult::new("👎", "Negation", &["Shake head left to right"]),
    );
    map.insert(
        "i love you",
        TranslationResult::new("❤️", "Love expression", &["Hand on heart", "Point to person"]),
    );
    map.insert(
        "water",
        TranslationResult::new("💧", "Water request", &["Drinking mime", "Pouring gesture"]),
    );
    map.insert(
        "eat",
        TranslationResult::new("🍽️", "Eating action", &["Hand to mouth", "Chewing motion"]),
    );
    map.insert(
        "sleep",
        TranslationResult::new("😴", "Sleep action", &["Hands under cheek", "Close eyes"]),
    );
    map.insert(
        "help",
        TranslationResult::new("🆘", "Help request", &["Extended hands", "Worried expression"]),
    );

    map
});

/// Normalize input text into a lookup key: lowercased and trimmed
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Look up the gesture rendering for a phrase
///
/// Lookup is case- and surrounding-whitespace-insensitive. Returns `None` on a
/// miss; the caller decides what a miss means.
pub fn lookup(text: &str) -> Option<&'static TranslationResult> {
    LEXICON.get(normalize(text).as_str())
}

/// Number of phrases in the lexicon
pub fn len() -> usize {
    LEXICON.len()
}

/// Check whether a phrase is in the lexicon
pub fn contains(text: &str) -> bool {
    LEXICON.contains_key(normalize(text).as_str())
}
