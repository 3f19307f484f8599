/*!
 * Configuration for the translation engine.
 *
 * This module handles the translation configuration including loading,
 * validating and saving configuration settings.
 */

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::TranslationError;

/// Models accepted by the translation engine
pub const SUPPORTED_MODELS: &[&str] = &["gpt-5", "gpt-5-mini"];

/// Configuration for a translation run
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Model name, must be one of [`SUPPORTED_MODELS`]
    #[serde(default = "default_model")]
    pub model: String,

    /// API key for the completion provider
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Target language name (free-form label, e.g. "Chinese (Traditional)")
    #[serde(default = "String::new")]
    pub target_language: String,

    /// Provider endpoint base URL; empty means the public API
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Number of entries grouped into one combined request
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Pause between consecutive requests, in milliseconds
    #[serde(default = "default_rate_limit_delay_ms")]
    pub rate_limit_delay_ms: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_batch_size() -> usize {
    crate::translation::batch::DEFAULT_BATCH_SIZE
}

fn default_rate_limit_delay_ms() -> u64 {
    500
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            target_language: String::new(),
            endpoint: String::new(),
            batch_size: default_batch_size(),
            rate_limit_delay_ms: default_rate_limit_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TranslationConfig {
    /// Create a configuration for the given model, credential and target language
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.into(),
            target_language: target_language.into(),
            ..Default::default()
        }
    }

    /// Check whether a model name is in the supported set
    pub fn is_supported_model(model: &str) -> bool {
        SUPPORTED_MODELS.contains(&model)
    }

    /// Validate the configuration
    ///
    /// Raised before any network activity; each failure is a distinct
    /// [`TranslationError`] variant so callers can report it precisely.
    pub fn validate(&self) -> std::result::Result<(), TranslationError> {
        if !Self::is_supported_model(&self.model) {
            return Err(TranslationError::UnsupportedModel {
                model: self.model.clone(),
                supported: SUPPORTED_MODELS.join(", "),
            });
        }

        if self.api_key.trim().is_empty() {
            return Err(TranslationError::EmptyApiKey);
        }

        if self.target_language.trim().is_empty() {
            return Err(TranslationError::EmptyTargetLanguage);
        }

        if !self.endpoint.is_empty() {
            url::Url::parse(&self.endpoint)
                .map_err(|e| TranslationError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;
        }

        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
