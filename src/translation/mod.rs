/*!
 * Translation engine for subtitle translation using AI providers.
 *
 * This module contains the core functionality for translating subtitles in
 * batches with terminology consistency. It is split into several submodules:
 *
 * - `core`: The translation service and batch processing loop
 * - `batch`: Batch rendering and numbered-response parsing
 * - `context`: Term extraction and context memory
 * - `prompts`: Prompt templates and builders for translation
 */

// Re-export main types for easier usage
pub use self::batch::{parse_batch_response, render_batch_block, DEFAULT_BATCH_SIZE};
pub use self::context::{ContextMemory, ContextSummary, TermExtractor};
pub use self::core::TranslationService;
pub use self::prompts::{PromptBuilder, PromptPair};

// Submodules
pub mod batch;
pub mod context;
pub mod core;
pub mod prompts;
