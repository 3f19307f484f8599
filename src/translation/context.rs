/*!
 * Context memory for terminology consistency.
 *
 * Proper nouns (character names, places) must be translated the same way in
 * every batch. [`TermExtractor`] detects candidate terms heuristically and
 * mines original→translation mappings from finished batches;
 * [`ContextMemory`] accumulates those mappings with a reconfirmation count
 * so later batches can reuse them.
 *
 * The detection heuristics are deliberately approximate. Their exact quirks
 * are covered by tests; tightening them linguistically is a behavior change,
 * not a fix.
 */

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::Serialize;

/// Common sentence starters and short words excluded from term candidacy
const STOPLIST: &[&str] = &[
    "I", "The", "This", "That", "These", "Those", "What", "Where", "When", "Who", "Why", "How",
    "Yes", "No", "Ok", "Okay", "Well", "So", "But", "And", "Or", "If", "Then", "Now", "Here",
    "There", "Come", "Go", "Get", "Take", "Give", "Make", "Let", "See", "Look", "Good", "Bad",
];

/// Heuristic proper-noun detection and translation-pair term mining
#[derive(Debug)]
pub struct TermExtractor {
    /// Capitalized word, optionally followed by more capitalized words
    term_pattern: Regex,
    /// Simple names like "John"
    simple_name: Regex,
    /// Full names like "John Smith"
    full_name: Regex,
    /// Title prefixes
    title_prefix: Regex,
    /// Runs of CJK/Hangul characters
    cjk_run: Regex,
    /// Runs of any non-ASCII characters
    non_ascii_run: Regex,
    /// Capitalized words (covers transliterated names)
    capitalized_word: Regex,
    /// Candidates that are nothing but punctuation
    punctuation_only: Regex,
    /// Excluded common words
    stoplist: HashSet<&'static str>,
}

impl TermExtractor {
    /// Create a new term extractor
    pub fn new() -> Self {
        Self {
            term_pattern: Regex::new(r"\b[A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]*)*\b").unwrap(),
            simple_name: Regex::new(r"^[A-Z][a-z]+$").unwrap(),
            full_name: Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+$").unwrap(),
            title_prefix: Regex::new(r"^(?:Dr|Mr|Mrs|Ms)\.").unwrap(),
            cjk_run: Regex::new(
                r"[\u{4e00}-\u{9fff}\u{3400}-\u{4dbf}\u{3040}-\u{309f}\u{30a0}-\u{30ff}\u{ac00}-\u{d7af}]+",
            )
            .unwrap(),
            non_ascii_run: Regex::new(r"[^\x00-\x7F]+").unwrap(),
            capitalized_word: Regex::new(r"\b[A-Z][a-zA-Z]+\b").unwrap(),
            punctuation_only: Regex::new(r"^\W+$").unwrap(),
            stoplist: STOPLIST.iter().copied().collect(),
        }
    }

    /// Extract potential proper nouns from a list of subtitle texts
    ///
    /// A candidate survives if it appears in more than one input string, or
    /// if it independently looks like a proper noun. The result is sorted
    /// lexicographically so extraction is deterministic.
    pub fn extract_potential_terms(&self, texts: &[String]) -> Vec<String> {
        let mut candidates: HashSet<String> = HashSet::new();

        for text in texts {
            for found in self.term_pattern.find_iter(text) {
                let candidate = found.as_str().trim();
                if !self.stoplist.contains(candidate) {
                    candidates.insert(candidate.to_string());
                }
            }
        }

        let mut terms: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| {
                let occurrences = texts.iter().filter(|t| t.contains(candidate.as_str())).count();
                occurrences > 1 || self.is_likely_proper_noun(candidate)
            })
            .collect();

        terms.sort();
        terms
    }

    /// Check whether a candidate looks like a proper noun on its own
    fn is_likely_proper_noun(&self, candidate: &str) -> bool {
        if self.simple_name.is_match(candidate)
            || self.full_name.is_match(candidate)
            || self.title_prefix.is_match(candidate)
        {
            return true;
        }

        // Multiple capitals in one token, acronym-like or camel-style names
        let capital_count = candidate.chars().filter(|c| c.is_uppercase()).count();
        capital_count >= 2 && candidate.chars().count() >= 4
    }

    /// Mine original→translation term mappings from an aligned batch pair
    ///
    /// Requires equal lengths; a mismatch yields an empty mapping rather
    /// than an error. For each detected term, the first original containing
    /// it is aligned with its translation, and the first valid translated
    /// candidate wins. Terms with no valid candidate are dropped.
    pub fn extract_terms_from_translation_pair(
        &self,
        originals: &[String],
        translations: &[String],
    ) -> HashMap<String, String> {
        if originals.len() != translations.len() {
            return HashMap::new();
        }

        let mut mappings = HashMap::new();

        for term in self.extract_potential_terms(originals) {
            let Some(index) = originals.iter().position(|text| text.contains(&term)) else {
                continue;
            };

            let candidates = self.extract_translated_candidates(&translations[index]);
            if let Some(candidate) = candidates
                .into_iter()
                .find(|c| self.is_valid_translation_candidate(c))
            {
                mappings.insert(term, candidate);
            }
        }

        mappings
    }

    /// Extract potential translated proper nouns from a translated text
    ///
    /// Union of CJK/Hangul runs, non-ASCII runs and capitalized words,
    /// deduplicated in extraction order.
    fn extract_translated_candidates(&self, translated: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for pattern in [&self.cjk_run, &self.non_ascii_run, &self.capitalized_word] {
            for found in pattern.find_iter(translated) {
                let candidate = found.as_str().to_string();
                if seen.insert(candidate.clone()) {
                    candidates.push(candidate);
                }
            }
        }

        candidates
    }

    /// Check whether a candidate is a plausible proper-noun translation
    fn is_valid_translation_candidate(&self, candidate: &str) -> bool {
        let length = candidate.chars().count();
        if length < 1 || length > 20 {
            return false;
        }

        !self.punctuation_only.is_match(candidate)
    }
}

impl Default for TermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of the current context state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextSummary {
    /// Number of established terms
    pub total_terms: usize,
    /// Number of terms reconfirmed at least once (confidence ≥ 2)
    pub high_confidence_terms: usize,
    /// Number of batches that contributed terms
    pub batches_processed: usize,
    /// Snapshot of the established term mappings
    pub established_terms: HashMap<String, String>,
}

/// Accumulated term mappings for one translation run
///
/// Created fresh per run, mutated after every successful batch, discarded at
/// the end of the run. Later observations never overwrite an established
/// translation; they only raise its confidence.
#[derive(Debug, Clone, Default)]
pub struct ContextMemory {
    /// Original term → established translation
    established_terms: HashMap<String, String>,
    /// Original term → number of batches that confirmed the mapping
    term_confidence: HashMap<String, u32>,
    /// Per-batch term snapshots, reporting only
    batch_history: Vec<HashMap<String, String>>,
}

impl ContextMemory {
    /// Create an empty context memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch's mined term mappings into the memory
    ///
    /// Unseen terms are inserted with confidence 1; seen terms keep their
    /// stored translation and gain one confidence point. Non-empty mappings
    /// are appended to the batch history.
    pub fn update_terms(&mut self, new_terms: &HashMap<String, String>) {
        for (original, translation) in new_terms {
            if self.established_terms.contains_key(original) {
                *self.term_confidence.entry(original.clone()).or_insert(0) += 1;
            } else {
                self.established_terms
                    .insert(original.clone(), translation.clone());
                self.term_confidence.insert(original.clone(), 1);
            }
        }

        if !new_terms.is_empty() {
            self.batch_history.push(new_terms.clone());
        }
    }

    /// Established terms with at least the given confidence
    pub fn established_terms(&self, min_confidence: u32) -> HashMap<String, String> {
        self.established_terms
            .iter()
            .filter(|(original, _)| {
                self.term_confidence.get(*original).copied().unwrap_or(0) >= min_confidence
            })
            .map(|(original, translation)| (original.clone(), translation.clone()))
            .collect()
    }

    /// Confidence of one term, if established
    pub fn confidence(&self, original: &str) -> Option<u32> {
        self.term_confidence.get(original).copied()
    }

    /// Number of batches that contributed terms
    pub fn batches_processed(&self) -> usize {
        self.batch_history.len()
    }

    /// Summarize the current state without mutating it
    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            total_terms: self.established_terms.len(),
            high_confidence_terms: self.established_terms(2).len(),
            batches_processed: self.batch_history.len(),
            established_terms: self.established_terms.clone(),
        }
    }

    /// Clear all established terms, confidences and history
    pub fn reset(&mut self) {
        self.established_terms.clear();
        self.term_confidence.clear();
        self.batch_history.clear();
    }
}
