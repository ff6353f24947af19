/*!
 * Kannada script transliteration.
 *
 * Deterministic, side-effect-free conversion of Kannada text into Latin
 * renderings:
 * - `Scheme::Iso15919`: the ISO 15919 romanization (Latin script display)
 * - `Scheme::Itrans`: ITRANS ASCII conventions (English phonetics display)
 */

mod kannada;

pub use kannada::transliterate;

/// Target romanization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// ISO 15919 romanization with diacritics (e.g. ನಾನು -> nānu)
    Iso15919,
    /// ITRANS ASCII phonetics (e.g. ನಾನು -> nAnu)
    Itrans,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iso15919 => write!(f, "ISO 15919"),
            Self::Itrans => write!(f, "ITRANS"),
        }
    }
}
