/*!
 * # kavaja - Learn Kannada via Japanese
 *
 * A Rust library for building Kannada learning lessons from Japanese text.
 *
 * ## Features
 *
 * - Translate Japanese input to Kannada
 * - Render the Kannada in Latin script (ISO 15919) and English phonetics (ITRANS)
 * - Synthesize Kannada audio for the sentence and for each flashcard word
 * - Segment the Japanese input and pair it positionally with the Kannada
 *   words to produce word-level flashcards
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `alignment`: Positional word pairing between the two token sequences
 * - `collaborators`: Clients for the external services the pipeline calls:
 *   - `collaborators::google_translate`: Translation client
 *   - `collaborators::google_tts`: Speech synthesis client
 *   - `collaborators::mock`: Mock collaborators for testing
 * - `segmenter`: Japanese word segmentation (TinySegmenter)
 * - `translit`: Kannada script transliteration (ISO 15919 / ITRANS)
 * - `lesson`: Lesson and flashcard data model
 * - `app_controller`: Main application controller
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod alignment;
pub mod app_config;
pub mod app_controller;
pub mod collaborators;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod lesson;
pub mod segmenter;
pub mod translit;

// Re-export main types for easier usage
pub use alignment::{AlignedPair, pair_tokens};
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, CollaboratorError, LessonError};
pub use lesson::{Flashcard, Lesson};
pub use translit::{Scheme, transliterate};
