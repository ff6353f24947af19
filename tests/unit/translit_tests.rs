/*!
 * Tests for Kannada transliteration
 */

use kavaja::translit::{Scheme, transliterate};

/// Basic consonant + vowel sign sequences
#[test]
fn test_transliterate_withSimpleWord_shouldRenderBothSchemes() {
    assert_eq!(transliterate("ನಾನು", Scheme::Iso15919), "nānu");
    assert_eq!(transliterate("ನಾನು", Scheme::Itrans), "nAnu");
}

/// Virama clusters suppress the inherent vowel inside conjuncts
#[test]
fn test_transliterate_withConsonantCluster_shouldSuppressInherentVowel() {
    assert_eq!(transliterate("ವಿದ್ಯಾರ್ಥಿ", Scheme::Iso15919), "vidyārthi");
    assert_eq!(transliterate("ವಿದ್ಯಾರ್ಥಿ", Scheme::Itrans), "vidyArthi");
}

/// A trailing consonant without a vowel sign realizes the inherent `a`
#[test]
fn test_transliterate_withBareConsonants_shouldRealizeInherentVowel() {
    assert_eq!(transliterate("ಕಮಲ", Scheme::Iso15919), "kamala");
    assert_eq!(transliterate("ಕಮಲ", Scheme::Itrans), "kamala");
}

/// A word-final virama leaves the consonant bare
#[test]
fn test_transliterate_withFinalVirama_shouldEmitBareConsonant() {
    assert_eq!(transliterate("ಕ್", Scheme::Iso15919), "k");
    assert_eq!(transliterate("ಕ್", Scheme::Itrans), "k");
}

/// Anusvara attaches to the preceding syllable
#[test]
fn test_transliterate_withAnusvara_shouldRenderNasalMark() {
    assert_eq!(transliterate("ಬೆಂಗಳೂರು", Scheme::Iso15919), "beṁgaḷūru");
    assert_eq!(transliterate("ಬೆಂಗಳೂರು", Scheme::Itrans), "b^eMgaLUru");
}

/// Independent vowels, including the Dravidian short/long e and o split
#[test]
fn test_transliterate_withIndependentVowels_shouldDistinguishLength() {
    assert_eq!(transliterate("ಅ", Scheme::Iso15919), "a");
    assert_eq!(transliterate("ಆ", Scheme::Iso15919), "ā");
    assert_eq!(transliterate("ಆ", Scheme::Itrans), "A");
    assert_eq!(transliterate("ಎ", Scheme::Iso15919), "e");
    assert_eq!(transliterate("ಏ", Scheme::Iso15919), "ē");
    assert_eq!(transliterate("ಎ", Scheme::Itrans), "^e");
    assert_eq!(transliterate("ಏ", Scheme::Itrans), "e");
    assert_eq!(transliterate("ಒ", Scheme::Itrans), "^o");
    assert_eq!(transliterate("ಓ", Scheme::Itrans), "o");
}

/// Retroflex consonants use the ITRANS capitals
#[test]
fn test_transliterate_withRetroflexes_shouldUseItransCapitals() {
    assert_eq!(transliterate("ಟಡಣ", Scheme::Itrans), "TaDaNa");
    assert_eq!(transliterate("ಟಡಣ", Scheme::Iso15919), "ṭaḍaṇa");
}

/// Kannada digits map to ASCII digits
#[test]
fn test_transliterate_withKannadaDigits_shouldMapToAscii() {
    assert_eq!(transliterate("೧೨೩", Scheme::Iso15919), "123");
    assert_eq!(transliterate("೦೯", Scheme::Itrans), "09");
}

/// Characters outside the Kannada block pass through unchanged
#[test]
fn test_transliterate_withMixedText_shouldPassThroughForeignChars() {
    assert_eq!(transliterate("ಕ, ಬ!", Scheme::Iso15919), "ka, ba!");
    assert_eq!(transliterate("abc 123", Scheme::Itrans), "abc 123");
}

/// Whitespace separates words and resolves pending inherent vowels
#[test]
fn test_transliterate_withSentence_shouldKeepWordBoundaries() {
    assert_eq!(
        transliterate("ನಾನು ವಿದ್ಯಾರ್ಥಿ", Scheme::Iso15919),
        "nānu vidyārthi"
    );
    assert_eq!(
        transliterate("ನಾನು ವಿದ್ಯಾರ್ಥಿ", Scheme::Itrans),
        "nAnu vidyArthi"
    );
}

/// Empty input yields empty output
#[test]
fn test_transliterate_withEmptyInput_shouldReturnEmpty() {
    assert_eq!(transliterate("", Scheme::Iso15919), "");
    assert_eq!(transliterate("", Scheme::Itrans), "");
}

/// Transliteration is deterministic
#[test]
fn test_transliterate_withRepeatedCalls_shouldBeDeterministic() {
    let text = "ಕನ್ನಡ ಕಲಿಯಿರಿ";
    assert_eq!(
        transliterate(text, Scheme::Iso15919),
        transliterate(text, Scheme::Iso15919)
    );
}
