use serde::{Deserialize, Serialize};

/// Lesson data model
///
/// Everything here is request-scoped: built fresh per submission, rendered,
/// written out, discarded. Nothing is cached between runs.
/// A complete lesson built from one Japanese input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// The raw Japanese input, as submitted
    pub input: String,

    /// Kannada translation of the full input
    pub translation: String,

    /// The translation in Latin script (ISO 15919)
    pub latin: String,

    /// The translation in English phonetics (ITRANS)
    pub phonetics: String,

    /// Word-level flashcards, in pairing order
    pub cards: Vec<Flashcard>,
}

/// One word-level flashcard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    /// 1-based position of the card; also keys the audio filename
    pub index: usize,

    /// Japanese word from the segmenter
    pub source_word: String,

    /// Kannada word positionally paired with it
    pub target_word: String,

    /// The Kannada word in Latin script (ISO 15919)
    pub latin: String,

    /// The Kannada word in English phonetics (ITRANS)
    pub phonetics: String,
}

impl Lesson {
    /// Filename the sentence audio clip is written under
    pub fn sentence_audio_filename() -> &'static str {
        "sentence.mp3"
    }

    /// Filename a word audio clip is written under, keyed by the
    /// card's 1-based index
    pub fn word_audio_filename(index: usize) -> String {
        format!("word_{}.mp3", index)
    }

    /// Render the lesson for terminal display
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Translation Results\n");
        out.push_str("-------------------\n");
        out.push_str(&format!("Japanese Input:        {}\n", self.input));
        out.push_str(&format!("Kannada Translation:   {}\n", self.translation));
        out.push_str(&format!("Kannada in Latin:      {}\n", self.latin));
        out.push_str(&format!("English Phonetics:     {}\n", self.phonetics));
        out.push_str(&format!(
            "Sentence Audio:        {}\n",
            Self::sentence_audio_filename()
        ));

        if !self.cards.is_empty() {
            out.push_str("\nFlashcards (Word-by-Word)\n");
            out.push_str("-------------------------\n");
            for card in &self.cards {
                out.push_str(&format!(
                    "Word {}: {}\n  Kannada:   {}\n  Latin:     {}\n  Phonetics: {}\n  Audio:     {}\n",
                    card.index,
                    card.source_word,
                    card.target_word,
                    card.latin,
                    card.phonetics,
                    Self::word_audio_filename(card.index)
                ));
            }
        }

        out
    }
}
