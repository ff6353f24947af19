/*!
 * Mock collaborator implementations for testing.
 *
 * This module provides mocks that simulate different behaviors:
 * - `MockTranslator::working()` - Always succeeds with a canned translation
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockSynthesizer::working()` - Always returns a small fake MP3 payload
 * - `MockSynthesizer::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::collaborators::{Synthesize, Translate};
use crate::errors::CollaboratorError;

/// Behavior mode for mock collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
}

/// Mock translator for testing pipeline behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Fixed translation to return, if set
    canned_translation: Option<String>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            canned_translation: None,
        }
    }

    /// Create a working mock that echoes a marked-up translation
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an intermittently failing mock
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Always answer with the given translation
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.canned_translation = Some(translation.into());
        self
    }

    /// Number of requests this mock has received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn should_fail(&self) -> bool {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        match self.behavior {
            MockBehavior::Working => false,
            MockBehavior::Failing => true,
            MockBehavior::Intermittent { fail_every } => {
                fail_every > 0 && count % fail_every == 0
            }
        }
    }
}

#[async_trait]
impl Translate for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, CollaboratorError> {
        if self.should_fail() {
            return Err(CollaboratorError::RequestFailed(
                "Mock translator failure".to_string(),
            ));
        }

        if let Some(canned) = &self.canned_translation {
            return Ok(canned.clone());
        }

        Ok(format!("[{}->{}] {}", source, target, text))
    }
}

/// Mock speech synthesizer for testing pipeline behavior
#[derive(Debug)]
pub struct MockSynthesizer {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
}

impl MockSynthesizer {
    /// Create a new mock synthesizer with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock synthesizer
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock synthesizer
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an intermittently failing mock synthesizer
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Number of requests this mock has received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn should_fail(&self) -> bool {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        match self.behavior {
            MockBehavior::Working => false,
            MockBehavior::Failing => true,
            MockBehavior::Intermittent { fail_every } => {
                fail_every > 0 && count % fail_every == 0
            }
        }
    }
}

#[async_trait]
impl Synthesize for MockSynthesizer {
    async fn synthesize(&self, text: &str, _lang: &str) -> Result<Bytes, CollaboratorError> {
        if self.should_fail() {
            return Err(CollaboratorError::RequestFailed(
                "Mock synthesizer failure".to_string(),
            ));
        }

        // A recognizable fake payload: MP3 frame sync bytes then the text
        let mut audio = vec![0xFF, 0xFB];
        audio.extend_from_slice(text.as_bytes());
        Ok(Bytes::from(audio))
    }
}
