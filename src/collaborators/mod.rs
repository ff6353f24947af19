/*!
 * Clients for the external collaborators the lesson pipeline depends on.
 *
 * This module contains the boundary contracts and their implementations:
 * - Google Translate: sentence translation (unauthenticated web endpoint)
 * - Google TTS: speech synthesis returning MP3 bytes
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::errors::CollaboratorError;

/// Contract for a translation collaborator
///
/// Any failure is fatal for the current lesson; callers do not retry.
#[async_trait]
pub trait Translate: Send + Sync + Debug {
    /// Translate text between two languages
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source` - Source language code (ISO 639-1)
    /// * `target` - Target language code (ISO 639-1)
    ///
    /// # Returns
    /// * `Result<String, CollaboratorError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, CollaboratorError>;
}

/// Contract for a speech synthesis collaborator
#[async_trait]
pub trait Synthesize: Send + Sync + Debug {
    /// Synthesize spoken audio for the given text
    ///
    /// # Arguments
    /// * `text` - The text to speak
    /// * `lang` - Language code (ISO 639-1)
    ///
    /// # Returns
    /// * `Result<Bytes, CollaboratorError>` - MP3 audio bytes or an error
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Bytes, CollaboratorError>;
}

pub mod google_translate;
pub mod google_tts;
pub mod mock;
