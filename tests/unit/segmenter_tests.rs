/*!
 * Tests for Japanese word segmentation
 */

use kavaja::segmenter::segment;

/// The canonical TinySegmenter example splits as documented
#[test]
fn test_segment_withCanonicalSentence_shouldMatchKnownTokens() {
    let tokens = segment("私の名前は中野です");
    assert_eq!(tokens, vec!["私", "の", "名前", "は", "中野", "です"]);
}

/// Tokens concatenate back to the input; segmentation loses nothing
#[test]
fn test_segment_withPlainSentence_shouldReconstructInput() {
    let input = "私は学生です";
    let tokens = segment(input);

    assert!(!tokens.is_empty());
    assert_eq!(tokens.concat(), input);
}

/// Whitespace-only tokens are filtered out
#[test]
fn test_segment_withWhitespace_shouldFilterBlankTokens() {
    let tokens = segment("こんにちは 世界");

    assert!(tokens.iter().all(|token| !token.trim().is_empty()));
    let rejoined: String = tokens.concat();
    assert_eq!(rejoined.replace(' ', ""), "こんにちは世界");
}

/// Empty input yields no tokens
#[test]
fn test_segment_withEmptyInput_shouldReturnEmpty() {
    assert!(segment("").is_empty());
}

/// Segmentation is deterministic; order is reading order
#[test]
fn test_segment_withRepeatedCalls_shouldBeDeterministic() {
    let input = "今日は晴れです";
    assert_eq!(segment(input), segment(input));
}
