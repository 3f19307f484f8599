/*!
 * # subtrans - Batch subtitle translation with context memory
 *
 * A Rust library for translating subtitle files with an LLM-backed
 * completion provider while keeping terminology (character names, places,
 * proper nouns) consistent across batches.
 *
 * ## Features
 *
 * - Parse and serialize SRT subtitle files
 * - Batch translation with a numbered request/response protocol
 * - Per-item fallback when a combined batch request fails
 * - Heuristic term extraction and context-memory terminology consistency
 * - Progress reporting and inter-request pacing
 * - Character-count based cost estimation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Subtitle file parsing and serialization
 * - `translation`: Batch translation engine:
 *   - `translation::core`: The translation service and batch loop
 *   - `translation::batch`: Batch rendering and response parsing
 *   - `translation::context`: Term extraction and context memory
 *   - `translation::prompts`: Prompt construction
 * - `cost`: Cost estimation
 * - `providers`: Client implementations for completion backends:
 *   - `providers::openai`: OpenAI chat-completions client
 *   - `providers::mock`: Mock provider for tests
 * - `errors`: Custom error types for the library
 *
 * Batches are processed strictly sequentially: the terminology established
 * by one batch feeds the prompts of the next, so there is never more than
 * one request in flight.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod cost;
pub mod errors;
pub mod providers;
pub mod subtitle_processor;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{TranslationConfig, SUPPORTED_MODELS};
pub use cost::{estimate_translation_cost, CostEstimate};
pub use errors::{ProviderError, TranslationError};
pub use subtitle_processor::{validate_srt_content, SubtitleCollection, SubtitleEntry};
pub use translation::{ContextMemory, TranslationService};
