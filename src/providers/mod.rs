/*!
 * Provider implementations for completion backends.
 *
 * The translation engine treats its backend as a black box behind a single
 * call interface: a model identifier, a system instruction and a user
 * message go in, one text reply comes out. Any LLM-backed completion
 * provider can be substituted as long as it exposes that shape.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier
    pub model: String,

    /// System instruction guiding the reply
    pub system: String,

    /// User message carrying the content to translate
    pub user: String,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(
        model: impl Into<String>,
        system: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system: system.into(),
            user: user.into(),
        }
    }
}

/// Common trait for all completion providers
///
/// Implementations are used interchangeably by the translation engine via a
/// trait object, so the trait stays minimal: one request in, one text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync + Debug {
    /// Complete a request and return the reply text
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}

pub mod mock;
pub mod openai;
