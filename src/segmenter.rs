use log::debug;

/// Japanese word segmentation
///
/// Thin wrapper over the TinySegmenter port. Tokens come back in reading
/// order; whitespace-only tokens are filtered out so the flashcard pairing
/// only sees real words.
pub fn segment(text: &str) -> Vec<String> {
    let tokens: Vec<String> = tinysegmenter::tokenize(text)
        .into_iter()
        .filter(|token| !token.trim().is_empty())
        .collect();

    debug!("Segmented input into {} token(s)", tokens.len());
    tokens
}
