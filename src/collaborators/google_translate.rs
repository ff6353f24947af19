use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::collaborators::Translate;
use crate::errors::CollaboratorError;

/// Client for the unauthenticated Google Translate web endpoint
///
/// Uses the `translate_a/single` endpoint with `client=gtx`, which takes the
/// text as a query parameter and answers with a nested JSON array of
/// translated segments.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (optional, defaults to the public endpoint)
    endpoint: String,
}

impl GoogleTranslate {
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

    fn api_url(&self) -> String {
        if self.endpoint.is_empty() {
            "https://translate.googleapis.com/translate_a/single".to_string()
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        }
    }

    /// Join the translated segments of a `translate_a/single` response
    ///
    /// The response shape is `[[["<translated>", "<source>", ...], ...], ...]`;
    /// the translation is the concatenation of the first element of each
    /// segment in `response[0]`.
    fn extract_translation(body: &Value) -> Result<String, CollaboratorError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CollaboratorError::ParseError("Missing translation segments".to_string())
            })?;

        let translation: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translation.is_empty() {
            return Err(CollaboratorError::ParseError(
                "Empty translation in response".to_string(),
            ));
        }

        Ok(translation)
    }
}

#[async_trait]
impl Translate for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, CollaboratorError> {
        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| {
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
            error!("Translation service error ({}): {}", status, error_text);
            return Err(CollaboratorError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| CollaboratorError::ParseError(e.to_string()))?;

        Self::extract_translation(&body)
    }
}
