/*!
 * Tests for language utility functions
 */

use kavaja::language_utils::{
    LanguageCodeType, get_language_name, normalize_to_part1, validate_language_code,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    // ISO 639-1 tests
    assert!(matches!(
        validate_language_code("ja").unwrap(),
        LanguageCodeType::Part1
    ));
    assert!(matches!(
        validate_language_code("kn").unwrap(),
        LanguageCodeType::Part1
    ));

    // ISO 639-3 tests
    assert!(matches!(
        validate_language_code("jpn").unwrap(),
        LanguageCodeType::Part2T
    ));
    assert!(matches!(
        validate_language_code("kan").unwrap(),
        LanguageCodeType::Part2T
    ));

    // Whitespace and case tests
    assert!(matches!(
        validate_language_code(" JA ").unwrap(),
        LanguageCodeType::Part1
    ));

    // Invalid codes
    assert!(validate_language_code("xyz").is_err());
    assert!(validate_language_code("123").is_err());
    assert!(validate_language_code("j").is_err());
}

/// Test normalization of language codes to ISO 639-1
#[test]
fn test_normalize_to_part1_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part1("ja").unwrap(), "ja");
    assert_eq!(normalize_to_part1("jpn").unwrap(), "ja");
    assert_eq!(normalize_to_part1("kn").unwrap(), "kn");
    assert_eq!(normalize_to_part1("kan").unwrap(), "kn");

    // Case insensitivity and whitespace
    assert_eq!(normalize_to_part1("JA").unwrap(), "ja");
    assert_eq!(normalize_to_part1(" kn ").unwrap(), "kn");

    // Invalid codes
    assert!(normalize_to_part1("xyz").is_err());
}

/// Test retrieval of language names from codes
#[test]
fn test_get_language_name_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(get_language_name("ja").unwrap(), "Japanese");
    assert_eq!(get_language_name("jpn").unwrap(), "Japanese");
    assert_eq!(get_language_name("kn").unwrap(), "Kannada");
    assert_eq!(get_language_name("kan").unwrap(), "Kannada");

    // Invalid codes
    assert!(get_language_name("xyz").is_err());
}
