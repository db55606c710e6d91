/*!
 * Tests for the lexicon and the translate operation
 */

use signspeak::lexicon;
use signspeak::translation::{Language, Translator};

#[test]
fn test_lexicon_lookup_withEquivalentInputs_shouldReturnSameResult() {
    let variants = ["bonjour", "Bonjour", "  BONJOUR  ", "bonjour "];

    let first = lexicon::lookup(variants[0]).expect("expected lexicon hit");
    for variant in &variants[1..] {
        let result = lexicon::lookup(variant).expect("expected lexicon hit");
        assert_eq!(result, first, "variant '{}' diverged", variant);
    }
}

#[test]
fn test_lexicon_lookup_shouldCoverFrenchAndEnglishVocabulary() {
    for phrase in ["bonjour", "merci", "au revoir", "oui", "non", "je t'aime",
                   "eau", "manger", "dormir", "aide",
                   "hello", "thank you", "goodbye", "yes", "no", "i love you",
                   "water", "eat", "sleep", "help"] {
        assert!(lexicon::contains(phrase), "missing phrase '{}'", phrase);
    }
    assert_eq!(lexicon::len(), 20);
}

#[tokio::test]
async fn test_translate_withKnownFrenchPhrase_shouldMatchLexicon() {
    let translator = Translator::new();

    let record = translator.translate("Bonjour", Language::Fr).await;

    assert_eq!(record.result.emoji, "👋");
    assert_eq!(record.result.description, "Geste de salutation");
    assert_eq!(
        record.result.gestures.as_deref(),
        Some(&["Lever la main".to_string(), "Mouvement de gauche à droite".to_string()][..])
    );
}

#[tokio::test]
async fn test_translate_withUnknownPhrase_shouldReturnFallback() {
    let translator = Translator::new();

    let record = translator.translate("xyz123", Language::Fr).await;

    assert_eq!(record.result.emoji, "🤷");
    assert_eq!(record.result.description, "translation not found");
    assert!(record.result.is_fallback());
}

#[tokio::test]
async fn test_translate_shouldPreserveOriginalInputText() {
    let translator = Translator::new();

    let record = translator.translate("  Hello  ", Language::En).await;

    // The record keeps what the caller typed; only the lookup key is normalized
    assert_eq!(record.input_text, "  Hello  ");
    assert_eq!(record.result.description, "Greeting gesture");
}

#[tokio::test]
async fn test_translate_sameNormalizedInput_shouldBeIdempotentOnResult() {
    let translator = Translator::new();

    let a = translator.translate("THANK YOU", Language::En).await;
    let b = translator.translate("thank you", Language::En).await;

    assert_eq!(a.result, b.result);
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_translate_withSimulatedLatency_shouldStillSucceed() {
    let translator = Translator::with_latency_ms(10);

    let record = translator.translate("yes", Language::En).await;

    assert_eq!(record.result.emoji, "👍");
}

#[tokio::test]
async fn test_translate_missIsNotAnError_forManyInputs() {
    let translator = Translator::new();

    for text in ["", "   ", "zzz", "bonjour merci", "123", "ça va"] {
        let record = translator.translate(text, Language::Fr).await;
        assert!(record.result.is_fallback(), "expected fallback for '{}'", text);
    }
}
