/*!
 * Tests for the lesson data model
 */

use kavaja::lesson::{Flashcard, Lesson};

fn sample_lesson() -> Lesson {
    Lesson {
        input: "私は学生です".to_string(),
        translation: "ನಾನು ವಿದ್ಯಾರ್ಥಿ".to_string(),
        latin: "nānu vidyārthi".to_string(),
        phonetics: "nAnu vidyArthi".to_string(),
        cards: vec![
            Flashcard {
                index: 1,
                source_word: "私".to_string(),
                target_word: "ನಾನು".to_string(),
                latin: "nānu".to_string(),
                phonetics: "nAnu".to_string(),
            },
            Flashcard {
                index: 2,
                source_word: "は".to_string(),
                target_word: "ವಿದ್ಯಾರ್ಥಿ".to_string(),
                latin: "vidyārthi".to_string(),
                phonetics: "vidyArthi".to_string(),
            },
        ],
    }
}

/// Audio filenames follow the documented convention
#[test]
fn test_audio_filenames_withIndexes_shouldFollowConvention() {
    assert_eq!(Lesson::sentence_audio_filename(), "sentence.mp3");
    assert_eq!(Lesson::word_audio_filename(1), "word_1.mp3");
    assert_eq!(Lesson::word_audio_filename(12), "word_12.mp3");
}

/// The rendered lesson contains every section and card
#[test]
fn test_render_withFullLesson_shouldIncludeAllSections() {
    let rendered = sample_lesson().render();

    assert!(rendered.contains("私は学生です"));
    assert!(rendered.contains("ನಾನು ವಿದ್ಯಾರ್ಥಿ"));
    assert!(rendered.contains("nānu vidyārthi"));
    assert!(rendered.contains("nAnu vidyArthi"));
    assert!(rendered.contains("sentence.mp3"));
    assert!(rendered.contains("Word 1: 私"));
    assert!(rendered.contains("Word 2: は"));
    assert!(rendered.contains("word_2.mp3"));
}

/// A lesson with no cards renders without the flashcard section
#[test]
fn test_render_withNoCards_shouldOmitFlashcardSection() {
    let mut lesson = sample_lesson();
    lesson.cards.clear();

    let rendered = lesson.render();
    assert!(!rendered.contains("Flashcards"));
    assert!(rendered.contains("Translation Results"));
}

/// Lessons round-trip through JSON
#[test]
fn test_serde_withFullLesson_shouldRoundTrip() {
    let lesson = sample_lesson();
    let json = serde_json::to_string(&lesson).expect("lesson should serialize");
    let parsed: Lesson = serde_json::from_str(&json).expect("lesson should deserialize");

    assert_eq!(parsed.input, lesson.input);
    assert_eq!(parsed.translation, lesson.translation);
    assert_eq!(parsed.cards.len(), 2);
    assert_eq!(parsed.cards[1].index, 2);
    assert_eq!(parsed.cards[1].target_word, "ವಿದ್ಯಾರ್ಥಿ");
}
