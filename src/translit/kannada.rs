use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::Scheme;

/// Kannada script tables and the transliteration state machine
///
/// Covers the Kannada Unicode block: independent vowels, consonants with
/// the inherent `a`, dependent vowel signs, virama clusters, anusvara,
/// visarga, candrabindu, avagraha and Kannada digits. Characters outside
/// the block pass through unchanged.
/// Entries are (character, ISO 15919 rendering, ITRANS rendering).
type Entry = (char, &'static str, &'static str);

const VIRAMA: char = '\u{0CCD}';

/// Independent vowel letters
static VOWELS: &[Entry] = &[
    ('ಅ', "a", "a"),
    ('ಆ', "ā", "A"),
    ('ಇ', "i", "i"),
    ('ಈ', "ī", "I"),
    ('ಉ', "u", "u"),
    ('ಊ', "ū", "U"),
    ('ಋ', "r̥", "RRi"),
    ('ೠ', "r̥̄", "RRI"),
    ('ಌ', "l̥", "LLi"),
    ('ೡ', "l̥̄", "LLI"),
    ('ಎ', "e", "^e"),
    ('ಏ', "ē", "e"),
    ('ಐ', "ai", "ai"),
    ('ಒ', "o", "^o"),
    ('ಓ', "ō", "o"),
    ('ಔ', "au", "au"),
];

/// Consonant letters, without the inherent vowel
static CONSONANTS: &[Entry] = &[
    ('ಕ', "k", "k"),
    ('ಖ', "kh", "kh"),
    ('ಗ', "g", "g"),
    ('ಘ', "gh", "gh"),
    ('ಙ', "ṅ", "~N"),
    ('ಚ', "c", "ch"),
    ('ಛ', "ch", "Ch"),
    ('ಜ', "j", "j"),
    ('ಝ', "jh", "jh"),
    ('ಞ', "ñ", "~n"),
    ('ಟ', "ṭ", "T"),
    ('ಠ', "ṭh", "Th"),
    ('ಡ', "ḍ", "D"),
    ('ಢ', "ḍh", "Dh"),
    ('ಣ', "ṇ", "N"),
    ('ತ', "t", "t"),
    ('ಥ', "th", "th"),
    ('ದ', "d", "d"),
    ('ಧ', "dh", "dh"),
    ('ನ', "n", "n"),
    ('ಪ', "p", "p"),
    ('ಫ', "ph", "ph"),
    ('ಬ', "b", "b"),
    ('ಭ', "bh", "bh"),
    ('ಮ', "m", "m"),
    ('ಯ', "y", "y"),
    ('ರ', "r", "r"),
    ('ಱ', "ṟ", "R"),
    ('ಲ', "l", "l"),
    ('ಳ', "ḷ", "L"),
    ('ೞ', "ḻ", "zh"),
    ('ವ', "v", "v"),
    ('ಶ', "ś", "sh"),
    ('ಷ', "ṣ", "Sh"),
    ('ಸ', "s", "s"),
    ('ಹ', "h", "h"),
];

/// Dependent vowel signs; each replaces the inherent `a` of the
/// preceding consonant
static MATRAS: &[Entry] = &[
    ('\u{0CBE}', "ā", "A"),
    ('\u{0CBF}', "i", "i"),
    ('\u{0CC0}', "ī", "I"),
    ('\u{0CC1}', "u", "u"),
    ('\u{0CC2}', "ū", "U"),
    ('\u{0CC3}', "r̥", "RRi"),
    ('\u{0CC4}', "r̥̄", "RRI"),
    ('\u{0CC6}', "e", "^e"),
    ('\u{0CC7}', "ē", "e"),
    ('\u{0CC8}', "ai", "ai"),
    ('\u{0CCA}', "o", "^o"),
    ('\u{0CCB}', "ō", "o"),
    ('\u{0CCC}', "au", "au"),
    ('\u{0CE2}', "l̥", "LLi"),
    ('\u{0CE3}', "l̥̄", "LLI"),
];

/// Marks that attach to a full syllable (candrabindu, anusvara,
/// visarga) plus the avagraha
static MODIFIERS: &[Entry] = &[
    ('\u{0C81}', "m̐", ".N"),
    ('\u{0C82}', "ṁ", "M"),
    ('\u{0C83}', "ḥ", "H"),
    ('\u{0CBD}', "'", ".a"),
];

static VOWEL_MAP: Lazy<HashMap<char, (&'static str, &'static str)>> =
    Lazy::new(|| VOWELS.iter().map(|&(c, iso, itr)| (c, (iso, itr))).collect());

static CONSONANT_MAP: Lazy<HashMap<char, (&'static str, &'static str)>> =
    Lazy::new(|| CONSONANTS.iter().map(|&(c, iso, itr)| (c, (iso, itr))).collect());

static MATRA_MAP: Lazy<HashMap<char, (&'static str, &'static str)>> =
    Lazy::new(|| MATRAS.iter().map(|&(c, iso, itr)| (c, (iso, itr))).collect());

static MODIFIER_MAP: Lazy<HashMap<char, (&'static str, &'static str)>> =
    Lazy::new(|| MODIFIERS.iter().map(|&(c, iso, itr)| (c, (iso, itr))).collect());

fn pick(entry: (&'static str, &'static str), scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Iso15919 => entry.0,
        Scheme::Itrans => entry.1,
    }
}

/// Map a Kannada digit to its ASCII counterpart
fn digit(ch: char) -> Option<char> {
    let code = ch as u32;
    if (0x0CE6..=0x0CEF).contains(&code) {
        char::from_u32('0' as u32 + (code - 0x0CE6))
    } else {
        None
    }
}

/// Transliterate Kannada text into the given scheme.
///
/// The state machine tracks whether the previous character was a consonant
/// still owed its inherent `a`: a following vowel sign replaces it, a
/// virama suppresses it (consonant cluster), anything else realizes it.
pub fn transliterate(text: &str, scheme: Scheme) -> String {
    let mut out = String::with_capacity(text.len());
    let mut inherent_pending = false;

    for ch in text.chars() {
        if let Some(&entry) = CONSONANT_MAP.get(&ch) {
            if inherent_pending {
                out.push('a');
            }
            out.push_str(pick(entry, scheme));
            inherent_pending = true;
        } else if let Some(&entry) = MATRA_MAP.get(&ch) {
            out.push_str(pick(entry, scheme));
            inherent_pending = false;
        } else if ch == VIRAMA {
            inherent_pending = false;
        } else {
            if inherent_pending {
                out.push('a');
                inherent_pending = false;
            }
            if let Some(&entry) = VOWEL_MAP.get(&ch) {
                out.push_str(pick(entry, scheme));
            } else if let Some(&entry) = MODIFIER_MAP.get(&ch) {
                out.push_str(pick(entry, scheme));
            } else if let Some(d) = digit(ch) {
                out.push(d);
            } else {
                out.push(ch);
            }
        }
    }

    if inherent_pending {
        out.push('a');
    }

    out
}
