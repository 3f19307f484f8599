/*!
 * Error types for the subtrans library.
 *
 * This module contains custom error types for different parts of the library,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to a completion provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during translation
///
/// The configuration variants are raised before any network activity; a
/// caller must not retry them without fixing its input. Provider errors are
/// handled inside the engine's fallback path and only surface if the engine
/// itself cannot recover.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// The requested model is not in the supported set
    #[error("Unsupported model: {model}. Supported models: {supported}")]
    UnsupportedModel {
        /// The rejected model name
        model: String,
        /// Comma-separated list of supported models
        supported: String,
    },

    /// The API key is empty after trimming
    #[error("API key cannot be empty")]
    EmptyApiKey,

    /// The target language is empty after trimming
    #[error("Target language cannot be empty")]
    EmptyTargetLanguage,

    /// The configured endpoint is not a valid URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}
