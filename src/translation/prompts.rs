/*!
 * Prompt templates for subtitle translation.
 *
 * All request instructions are built here; no other module constructs
 * prompts, which keeps the single-item and batch paths from drifting apart.
 * Three modes are supported: single item, plain batch, and context-aware
 * batch with established term mappings injected.
 */

use std::collections::HashMap;

/// Core translation rules shared by every mode
const BASE_RULES: &str = r#"Transform movie subtitles into {target_language} that sounds like locals naturally speaking.

ESSENTIAL RULES:
1. Use everyday speech patterns - how people really talk
2. Match the speaker's personality (casual/formal/young/old)
3. Keep names and places consistent throughout
4. Sound natural when spoken aloud
5. Use colloquial expressions native speakers actually use

AVOID: Textbook language, overly formal phrases, awkward literal translations

Make it sound so natural that {target_language} speakers would think it was originally written in their language."#;

/// Batch numbering and dialogue-flow rules
const BATCH_RULES: &str = r#"

BATCH PROCESSING RULES:
- Maintain dialogue flow and consistency across all subtitles
- Keep character personalities consistent throughout the batch
- Preserve context and relationships between consecutive subtitles

FORMAT REQUIREMENTS:
- Return each translation on a separate line with the same numbering (1. 2. 3. etc.)
- Maintain the exact numbering format provided in the input"#;

/// Dialogue-flow rules for the context-aware mode, terms injected separately
const CONTEXT_RULES: &str = r#"

CONTEXT-AWARE TRANSLATION:
- Maintain dialogue flow and consistency across all subtitles
- Keep character personalities consistent throughout the batch
- Preserve context and relationships between consecutive subtitles"#;

/// Numbering rules appended after the established-terms list
const FORMAT_RULES: &str = r#"

FORMAT REQUIREMENTS:
- Return each translation on a separate line with the same numbering (1. 2. 3. etc.)
- Maintain the exact numbering format provided in the input"#;

/// A system instruction paired with a user-message template
#[derive(Debug, Clone)]
pub struct PromptPair {
    /// System instruction for the completion request
    pub system: String,

    /// User-message template with a `{text}` or `{batch_content}` placeholder
    pub user_template: String,
}

impl PromptPair {
    /// Substitute the content placeholder in the user template
    pub fn fill_user(&self, content: &str) -> String {
        self.user_template
            .replace("{text}", content)
            .replace("{batch_content}", content)
    }
}

/// Builder for translation prompts, parameterized by target-language name
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    target_language: String,
}

impl PromptBuilder {
    /// Create a prompt builder for the given target language
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            target_language: target_language.into(),
        }
    }

    /// Render the shared base rules
    fn base_rules(&self) -> String {
        BASE_RULES.replace("{target_language}", &self.target_language)
    }

    /// Prompts for translating one subtitle in isolation
    pub fn single(&self) -> PromptPair {
        let mut system = self.base_rules();
        system.push_str("\n\nReturn ONLY the translation - no explanations.");

        PromptPair {
            system,
            user_template: format!(
                "Translate this movie subtitle to {}:\n\n{{text}}",
                self.target_language
            ),
        }
    }

    /// Prompts for translating a numbered batch of subtitles
    pub fn batch(&self) -> PromptPair {
        let mut system = self.base_rules();
        system.push_str(BATCH_RULES);

        PromptPair {
            system,
            user_template: format!(
                "Translate these consecutive movie subtitles to {}:\n\n{{batch_content}}",
                self.target_language
            ),
        }
    }

    /// Prompts for a numbered batch with established term mappings injected
    ///
    /// Terms are listed sorted by original so prompts are deterministic. All
    /// established terms are injected regardless of confidence.
    pub fn context_aware(&self, established_terms: &HashMap<String, String>) -> PromptPair {
        let mut system = self.base_rules();
        system.push_str(CONTEXT_RULES);

        if !established_terms.is_empty() {
            let mut pairs: Vec<(&String, &String)> = established_terms.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));

            let term_lines: Vec<String> = pairs
                .iter()
                .map(|(original, translation)| format!("- {} → {}", original, translation))
                .collect();

            system.push_str("\n\nESTABLISHED TRANSLATIONS (use these exact translations):\n");
            system.push_str(&term_lines.join("\n"));
        }

        system.push_str(FORMAT_RULES);

        PromptPair {
            system,
            user_template: format!(
                "Translate these consecutive movie subtitles to {}, maintaining consistency with previously established terms:\n\n{{batch_content}}",
                self.target_language
            ),
        }
    }
}
