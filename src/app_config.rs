use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), the language of the input text
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO), the language being learned
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translator collaborator config
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Speech synthesis collaborator config
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Output artifact config
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslatorConfig {
    /// Service endpoint URL (optional, for a proxy or self-hosted mirror)
    #[serde(default = "default_translate_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translate_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Speech synthesis service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeechConfig {
    /// Service endpoint URL (optional, for a proxy or self-hosted mirror)
    #[serde(default = "default_tts_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of concurrent word-audio requests
    #[serde(default = "default_concurrent_requests")]
    pub concurrent_requests: usize,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_tts_endpoint(),
            timeout_secs: default_timeout_secs(),
            concurrent_requests: default_concurrent_requests(),
        }
    }
}

/// Output artifact configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory lesson artifacts are written to
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Whether to also write the lesson as JSON next to the audio clips
    #[serde(default = "default_true")]
    pub write_lesson_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            write_lesson_json: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "ja".to_string()
}

fn default_target_language() -> String {
    "kn".to_string()
}

fn default_translate_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_tts_endpoint() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_concurrent_requests() -> usize {
    4
}

fn default_output_directory() -> String {
    "lesson".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.output.directory.trim().is_empty() {
            return Err(anyhow::anyhow!("Output directory must not be empty"));
        }

        if self.speech.concurrent_requests == 0 {
            return Err(anyhow::anyhow!(
                "speech.concurrent_requests must be at least 1"
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translator: TranslatorConfig::default(),
            speech: SpeechConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
