/*!
 * Subtitle file processing.
 *
 * Parses and serializes the SRT block format: a sequence number line, a
 * timestamp range line, and one or more text lines, with blocks separated by
 * blank lines. Timestamps are treated as opaque `HH:MM:SS,mmm` strings that
 * are pattern-matched and echoed back, never converted into durations.
 */

use std::fmt;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

// Timestamp range at the start of a block's second line
static TIMESTAMP_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3})\s*-->\s*(\d{2}:\d{2}:\d{2},\d{3})").unwrap()
});

// Timestamp range anywhere in the content, used for the cheap validity pre-check
static TIMESTAMP_ANYWHERE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}:\d{2}:\d{2},\d{3}\s*-->\s*\d{2}:\d{2}:\d{2},\d{3}").unwrap());

// Blocks are separated by one or more blank lines
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Single subtitle entry
///
/// Identity is positional: an entry is the Nth block parsed from one file.
/// The original sequence number is read during parsing to validate the block
/// but not stored; serialization renumbers from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    /// Start timestamp, opaque `HH:MM:SS,mmm` string
    pub start: String,

    /// End timestamp, opaque `HH:MM:SS,mmm` string
    pub end: String,

    /// Subtitle text, multi-line blocks joined with single spaces
    pub text: String,
}

impl SubtitleEntry {
    /// Create a new subtitle entry
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} --> {}\n{}", self.start, self.end, self.text)
    }
}

/// Ordered collection of subtitle entries parsed from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleCollection {
    /// Entries in source order
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Create a collection from existing entries
    pub fn from_entries(entries: Vec<SubtitleEntry>) -> Self {
        Self { entries }
    }

    /// Parse SRT content into a collection
    ///
    /// Content is split on blank-line boundaries. A block is kept only if its
    /// first line parses as an integer, its second line carries a valid
    /// timestamp range, and the remaining lines are non-empty once joined.
    /// Malformed or empty-text blocks are skipped silently; parsing never
    /// fails.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Self { entries };
        }

        for block in BLOCK_SEPARATOR_REGEX.split(trimmed) {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }

            let lines: Vec<&str> = block.lines().collect();
            if lines.len() < 3 {
                debug!("Skipping block with fewer than 3 lines");
                continue;
            }

            // First line must be the sequence number; its value is discarded
            if lines[0].trim().parse::<i64>().is_err() {
                debug!("Skipping block without numeric sequence line: {}", lines[0]);
                continue;
            }

            let Some(caps) = TIMESTAMP_LINE_REGEX.captures(lines[1]) else {
                debug!("Skipping block with invalid timestamp line: {}", lines[1]);
                continue;
            };

            let text = lines[2..].join(" ").trim().to_string();
            if text.is_empty() {
                continue;
            }

            entries.push(SubtitleEntry::new(&caps[1], &caps[2], text));
        }

        Self { entries }
    }

    /// Serialize the collection back to SRT content
    ///
    /// Entries are renumbered sequentially from 1 regardless of the source
    /// numbering. Blocks are joined with a single blank line.
    pub fn to_srt_string(&self) -> String {
        let blocks: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}\n{} --> {}\n{}\n", i + 1, entry.start, entry.end, entry.text))
            .collect();

        blocks.join("\n")
    }

    /// Read and parse a subtitle file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read subtitle file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Write the collection to an SRT file
    pub fn write_to_srt<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create subtitle file: {}", path.display()))?;
        file.write_all(self.to_srt_string().as_bytes())
            .with_context(|| format!("Failed to write subtitle file: {}", path.display()))?;

        Ok(())
    }

    /// Texts of all entries, in order
    pub fn texts(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    /// Replace entry texts with their translations, preserving timestamps
    ///
    /// Returns a new collection; entries beyond the length of `translations`
    /// keep their original text.
    pub fn with_texts(&self, translations: &[String]) -> Self {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = translations.get(i).cloned().unwrap_or_else(|| entry.text.clone());
                SubtitleEntry::new(&entry.start, &entry.end, text)
            })
            .collect();
        Self { entries }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SubtitleCollection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Subtitle collection with {} entries", self.entries.len())
    }
}

/// Cheap validity pre-check for SRT content
///
/// True iff the content carries at least one timestamp range and parsing
/// yields at least one entry. Tolerates empty input.
pub fn validate_srt_content(content: &str) -> bool {
    if !TIMESTAMP_ANYWHERE_REGEX.is_match(content) {
        return false;
    }

    !SubtitleCollection::parse(content).is_empty()
}
