/*!
 * Core translation engine.
 *
 * Splits subtitle texts into fixed-size windows, submits each window as one
 * combined completion request, parses the numbered reply, and folds mined
 * term mappings into a caller-owned [`ContextMemory`] so later batches reuse
 * the terminology established by earlier ones.
 *
 * Batches run strictly sequentially. The terms established by batch k must
 * be visible to the prompt of batch k+1, so there is never more than one
 * request in flight and parallel dispatch cannot be introduced without
 * breaking terminology propagation.
 */

use std::sync::Arc;
use std::time::Duration;

use log::{error, warn};

use crate::app_config::TranslationConfig;
use crate::errors::{ProviderError, TranslationError};
use crate::providers::openai::OpenAI;
use crate::providers::{CompletionProvider, CompletionRequest};

use super::batch::{parse_batch_response, render_batch_block};
use super::context::{ContextMemory, TermExtractor};
use super::prompts::{PromptBuilder, PromptPair};

/// Main translation service
///
/// Owns the completion provider and the run configuration. Holds no state
/// between calls; all cross-batch state lives in the caller-owned
/// [`ContextMemory`].
#[derive(Debug)]
pub struct TranslationService {
    /// Completion backend
    provider: Arc<dyn CompletionProvider>,
    /// Run configuration
    pub config: TranslationConfig,
    /// Term mining for context propagation
    extractor: TermExtractor,
}

impl TranslationService {
    /// Create a new translation service backed by the OpenAI API
    pub fn new(config: TranslationConfig) -> Result<Self, TranslationError> {
        config.validate()?;
        let provider = Arc::new(OpenAI::new_with_timeout(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.timeout_secs,
        ));
        Ok(Self {
            provider,
            config,
            extractor: TermExtractor::new(),
        })
    }

    /// Create a translation service with a custom completion provider
    pub fn with_provider(
        config: TranslationConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, TranslationError> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            extractor: TermExtractor::new(),
        })
    }

    /// Translate a list of subtitle texts, preserving length and order
    ///
    /// Convenience wrapper around [`translate_batch_texts`] without progress
    /// reporting.
    ///
    /// [`translate_batch_texts`]: Self::translate_batch_texts
    pub async fn translate_texts(
        &self,
        texts: &[String],
        context: Option<&mut ContextMemory>,
    ) -> Result<Vec<String>, TranslationError> {
        self.translate_batch_texts(texts, context, |_| {}).await
    }

    /// Translate with a fresh context memory and return it alongside the result
    ///
    /// The returned memory carries the terminology established during this
    /// run, for summary reporting.
    pub async fn translate_with_context<F>(
        &self,
        texts: &[String],
        on_progress: F,
    ) -> Result<(Vec<String>, ContextMemory), TranslationError>
    where
        F: Fn(f32),
    {
        let mut context = ContextMemory::new();
        let translations = self
            .translate_batch_texts(texts, Some(&mut context), on_progress)
            .await?;
        Ok((translations, context))
    }

    /// Translate a list of subtitle texts in batches
    ///
    /// The result has the same length and order as `texts`; empty and
    /// whitespace-only items come back as empty strings without touching the
    /// network. Configuration is validated before any network activity.
    ///
    /// A failed combined-batch call falls back to one request per item in
    /// that batch; a failed individual item keeps its original text. For a
    /// well-formed request this method never fails outright; worst case,
    /// some items come back untranslated or as explicit placeholders.
    ///
    /// `on_progress` is invoked after every batch with the fraction of
    /// non-empty items completed, reaching 1.0 on the final batch.
    pub async fn translate_batch_texts<F>(
        &self,
        texts: &[String],
        mut context: Option<&mut ContextMemory>,
        on_progress: F,
    ) -> Result<Vec<String>, TranslationError>
    where
        F: Fn(f32),
    {
        self.config.validate()?;

        if texts.is_empty() {
            return Ok(Vec::new());
        }

        // Keep the position of every non-empty item so interleaved blanks
        // map back to empty strings, never shifted
        let filtered: Vec<(usize, String)> = texts
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(index, text)| (index, text.trim().to_string()))
            .collect();

        if filtered.is_empty() {
            return Ok(vec![String::new(); texts.len()]);
        }

        let prompts = PromptBuilder::new(&self.config.target_language);
        let batch_size = self.config.batch_size.max(1);
        let batches: Vec<&[(usize, String)]> = filtered.chunks(batch_size).collect();
        let total_batches = batches.len();
        let total_items = filtered.len();

        let mut result = vec![String::new(); texts.len()];
        let mut completed_items = 0usize;

        for (batch_index, batch) in batches.into_iter().enumerate() {
            let originals: Vec<String> = batch.iter().map(|(_, text)| text.clone()).collect();

            let translations = self
                .translate_batch(&originals, &prompts, context.as_deref_mut(), batch_index)
                .await;

            for ((position, _), (translated, _succeeded)) in batch.iter().zip(translations) {
                result[*position] = translated;
            }

            completed_items += batch.len();
            on_progress(completed_items as f32 / total_items as f32);

            if batch_index + 1 < total_batches {
                self.pause().await;
            }
        }

        Ok(result)
    }

    /// Translate a single text through the single-item prompt
    pub async fn translate_text(&self, text: &str) -> Result<String, TranslationError> {
        self.config.validate()?;

        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let prompts = PromptBuilder::new(&self.config.target_language);
        let pair = prompts.single();
        let reply = self.complete(&pair, text.trim()).await?;

        let trimmed = reply.trim();
        if trimmed.is_empty() {
            Ok(text.trim().to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// Translate one batch, falling back to per-item requests on failure
    ///
    /// Each returned pair carries the translation and whether it actually
    /// succeeded; the flag is dropped at the public boundary but lets the
    /// engine report swallowed failures.
    async fn translate_batch(
        &self,
        originals: &[String],
        prompts: &PromptBuilder,
        mut context: Option<&mut ContextMemory>,
        batch_index: usize,
    ) -> Vec<(String, bool)> {
        let established = context
            .as_ref()
            .map(|memory| memory.established_terms(1))
            .unwrap_or_default();

        let pair = if established.is_empty() {
            prompts.batch()
        } else {
            prompts.context_aware(&established)
        };

        let block = render_batch_block(originals);

        match self.complete(&pair, &block).await {
            Ok(reply) => {
                let parsed = parse_batch_response(&reply, originals.len());

                // Later batches see the terms this batch established
                if let Some(memory) = context.as_mut() {
                    let mined = self
                        .extractor
                        .extract_terms_from_translation_pair(originals, &parsed);
                    memory.update_terms(&mined);
                }

                parsed.into_iter().map(|text| (text, true)).collect()
            }
            Err(e) => {
                warn!(
                    "Batch {} failed ({}), falling back to individual translation",
                    batch_index + 1,
                    e
                );

                let mut items = Vec::with_capacity(originals.len());
                for (item_index, original) in originals.iter().enumerate() {
                    if item_index > 0 {
                        self.pause().await;
                    }
                    items.push(self.translate_item_with_fallback(original, prompts).await);
                }
                items
            }
        }
    }

    /// Translate one item, substituting the original text on failure
    async fn translate_item_with_fallback(
        &self,
        text: &str,
        prompts: &PromptBuilder,
    ) -> (String, bool) {
        let pair = prompts.single();

        match self.complete(&pair, text).await {
            Ok(reply) => {
                let trimmed = reply.trim();
                if trimmed.is_empty() {
                    (text.to_string(), false)
                } else {
                    (trimmed.to_string(), true)
                }
            }
            Err(e) => {
                error!("Failed to translate text '{}': {}", text, e);
                (text.to_string(), false)
            }
        }
    }

    /// Issue one completion request with the configured per-request timeout
    async fn complete(&self, pair: &PromptPair, content: &str) -> Result<String, ProviderError> {
        let request = CompletionRequest::new(
            self.config.model.clone(),
            pair.system.clone(),
            pair.fill_user(content),
        );

        let timeout = Duration::from_secs(self.config.timeout_secs);
        match tokio::time::timeout(timeout, self.provider.complete(request)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::RequestFailed(format!(
                "request timed out after {}s",
                self.config.timeout_secs
            ))),
        }
    }

    /// Pause between consecutive requests
    async fn pause(&self) {
        if self.config.rate_limit_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.rate_limit_delay_ms)).await;
        }
    }
}
