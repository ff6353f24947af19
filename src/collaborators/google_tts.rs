use async_trait::async_trait;
use bytes::Bytes;
use log::error;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::collaborators::Synthesize;
use crate::errors::CollaboratorError;

/// Client for the Google Translate text-to-speech endpoint
///
/// The `translate_tts` endpoint with `client=tw-ob` answers with a raw MP3
/// stream for short texts, which is exactly what the sentence and word
/// clips need.
#[derive(Debug)]
pub struct GoogleTts {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (optional, defaults to the public endpoint)
    endpoint: String,
}

impl GoogleTts {
    /// Create a new client with the given endpoint and request timeout
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self, text: &str, lang: &str) -> Result<Url, CollaboratorError> {
        let base = if self.endpoint.is_empty() {
            "https://translate.google.com/translate_tts"
        } else {
            self.endpoint.trim_end_matches('/')
        };

        Url::parse_with_params(
            base,
            &[("ie", "UTF-8"), ("client", "tw-ob"), ("tl", lang), ("q", text)],
        )
        .map_err(|e| CollaboratorError::RequestFailed(format!("Invalid TTS URL: {}", e)))
    }
}

#[async_trait]
impl Synthesize for GoogleTts {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Bytes, CollaboratorError> {
        let url = self.api_url(text, lang)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_connect() {
                CollaboratorError::ConnectionError(e.to_string())
            } else {
                CollaboratorError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Speech service error ({}): {}", status, error_text);
            return Err(CollaboratorError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| CollaboratorError::ParseError(e.to_string()))?;

        if audio.is_empty() {
            return Err(CollaboratorError::ParseError(
                "Empty audio stream in response".to_string(),
            ));
        }

        Ok(audio)
    }
}
