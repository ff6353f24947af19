use anyhow::{Context, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::alignment;
use crate::app_config::Config;
use crate::collaborators::google_translate::GoogleTranslate;
use crate::collaborators::google_tts::GoogleTts;
use crate::collaborators::{Synthesize, Translate};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::lesson::{Flashcard, Lesson};
use crate::segmenter;
use crate::translit::{Scheme, transliterate};

// @module: Application controller for lesson building

/// Main application controller for the learning pipeline
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Translation collaborator
    translator: Arc<dyn Translate>,
    // @field: Speech synthesis collaborator
    synthesizer: Arc<dyn Synthesize>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let translator = Arc::new(GoogleTranslate::new(
            config.translator.endpoint.clone(),
            config.translator.timeout_secs,
        ));
        let synthesizer = Arc::new(GoogleTts::new(
            config.speech.endpoint.clone(),
            config.speech.timeout_secs,
        ));

        Ok(Self {
            config,
            translator,
            synthesizer,
        })
    }

    /// Create a controller with injected collaborators (used by tests)
    pub fn with_collaborators(
        config: Config,
        translator: Arc<dyn Translate>,
        synthesizer: Arc<dyn Synthesize>,
    ) -> Self {
        Self {
            config,
            translator,
            synthesizer,
        }
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.source_language.is_empty() && !self.config.target_language.is_empty()
    }

    /// Run the main workflow: build a lesson for the input text and write
    /// its artifacts into the output directory.
    ///
    /// Returns `Ok(None)` when nothing was produced (blank input, or
    /// existing artifacts without force overwrite); those are user-level
    /// warnings, not errors. Any collaborator failure aborts the whole
    /// lesson; no partial results are written.
    pub async fn run(
        &self,
        text: &str,
        output_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<Option<Lesson>> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        // Blank input is validated locally, before any collaborator call
        if text.trim().is_empty() {
            warn!("Please enter Japanese text.");
            return Ok(None);
        }

        let sentence_audio_path = output_dir.join(Lesson::sentence_audio_filename());
        if sentence_audio_path.exists() && !force_overwrite {
            warn!("Skipping, lesson already exists (use -f to force overwrite)");
            return Ok(None);
        }

        // Collaborator endpoints take 2-letter codes
        let source_lang = language_utils::normalize_to_part1(&self.config.source_language)?;
        let target_lang = language_utils::normalize_to_part1(&self.config.target_language)?;

        info!(
            "Translating {} -> {}",
            language_utils::get_language_name(&source_lang)?,
            language_utils::get_language_name(&target_lang)?
        );

        // Full sentence processing
        let translation = self
            .translator
            .translate(text, &source_lang, &target_lang)
            .await
            .context("Sentence translation failed")?;

        let latin = transliterate(&translation, Scheme::Iso15919);
        let phonetics = transliterate(&translation, Scheme::Itrans);

        debug!("Translation: {}", translation);

        let sentence_audio = self
            .synthesizer
            .synthesize(&translation, &target_lang)
            .await
            .context("Sentence audio synthesis failed")?;

        // Word-by-word flashcards: Japanese segmentation positionally
        // paired with the whitespace-split Kannada translation
        let source_tokens = segmenter::segment(text);
        let target_tokens: Vec<String> = translation
            .split_whitespace()
            .map(|word| word.to_string())
            .collect();

        let pairs = alignment::pair_tokens(&source_tokens, &target_tokens);

        let cards: Vec<Flashcard> = pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| Flashcard {
                index: i + 1,
                source_word: pair.source.clone(),
                target_word: pair.target.clone(),
                latin: transliterate(&pair.target, Scheme::Iso15919),
                phonetics: transliterate(&pair.target, Scheme::Itrans),
            })
            .collect();

        let word_audio = self.synthesize_word_audio(&cards, &target_lang).await?;

        // All collaborator calls succeeded; now write the artifacts
        FileManager::ensure_dir(&output_dir)?;
        FileManager::write_bytes(&sentence_audio_path, &sentence_audio)?;

        for (card, audio) in cards.iter().zip(word_audio.iter()) {
            let path = output_dir.join(Lesson::word_audio_filename(card.index));
            FileManager::write_bytes(&path, audio)?;
        }

        let lesson = Lesson {
            input: text.to_string(),
            translation,
            latin,
            phonetics,
            cards,
        };

        if self.config.output.write_lesson_json {
            self.write_lesson_json(&lesson, &output_dir)?;
        }

        info!(
            "Lesson complete: {} flashcard(s) in {}",
            lesson.cards.len(),
            Self::format_duration(start_time.elapsed())
        );

        Ok(Some(lesson))
    }

    /// Synthesize audio for each flashcard word.
    ///
    /// Requests run concurrently up to the configured limit; results are
    /// collected in card order so filenames stay keyed by index.
    async fn synthesize_word_audio(
        &self,
        cards: &[Flashcard],
        target_lang: &str,
    ) -> Result<Vec<bytes::Bytes>> {
        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let progress = ProgressBar::new(cards.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} word clips")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        let word_audio: Vec<bytes::Bytes> = stream::iter(cards.iter().map(|card| {
            let synthesizer = Arc::clone(&self.synthesizer);
            let word = card.target_word.clone();
            let lang = target_lang.to_string();
            let progress = progress.clone();
            async move {
                let audio = synthesizer.synthesize(&word, &lang).await;
                if audio.is_ok() {
                    progress.inc(1);
                }
                audio
            }
        }))
        .buffered(self.config.speech.concurrent_requests.max(1))
        .try_collect()
        .await
        .context("Word audio synthesis failed")?;

        progress.finish_and_clear();
        Ok(word_audio)
    }

    /// Write the lesson as pretty-printed JSON next to the audio clips
    fn write_lesson_json(&self, lesson: &Lesson, output_dir: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(lesson)
            .context("Failed to serialize lesson to JSON")?;
        FileManager::write_to_file(output_dir.join("lesson.json"), &json)
    }

    /// Format a duration as a compact human-readable string
    fn format_duration(duration: std::time::Duration) -> String {
        let total_secs = duration.as_secs();
        if total_secs >= 60 {
            format!("{}m{}s", total_secs / 60, total_secs % 60)
        } else {
            format!("{:.1}s", duration.as_secs_f64())
        }
    }
}
