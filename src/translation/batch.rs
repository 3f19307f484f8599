/*!
 * Batch request rendering and numbered-response parsing.
 *
 * A batch is rendered as `"{i}. {text}"` lines and the model is instructed
 * to echo the numbering in its reply. Parsing is tolerant: replies with
 * missing markers fall back to positional lines, and missing entries become
 * explicit placeholder strings instead of errors, so a degraded reply never
 * aborts a run.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of entries grouped into one combined request
pub const DEFAULT_BATCH_SIZE: usize = 12;

// Numbering prefix a model may put in front of a reply line
static NUMBERING_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+[.)]\s*").unwrap());

/// Render batch texts as numbered lines for the user prompt
pub fn render_batch_block(texts: &[String]) -> String {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| format!("{}. {}", i + 1, text))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Parse a numbered batch reply into exactly `expected_count` translations
///
/// For each expected index the reply is scanned for a line starting with
/// `"{i}."` or `"{i})"`. A single-item reply without numbering is taken
/// verbatim. When a marker is missing, the i-th reply line is used with any
/// numbering prefix stripped; when the reply has fewer lines than expected,
/// a `"Translation {i} not found"` placeholder is emitted. The result always
/// has exactly `expected_count` items.
pub fn parse_batch_response(response: &str, expected_count: usize) -> Vec<String> {
    let lines: Vec<&str> = response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    // Models sometimes ignore numbering for single items; take the whole
    // reply verbatim in that case
    if expected_count == 1 {
        let has_marker = lines
            .iter()
            .any(|line| line.starts_with("1.") || line.starts_with("1)"));
        if !has_marker {
            return vec![response.trim().to_string()];
        }
    }

    let mut translations = Vec::with_capacity(expected_count);

    for index in 1..=expected_count {
        let dot_marker = format!("{}.", index);
        let paren_marker = format!("{})", index);

        let matched = lines
            .iter()
            .find(|line| line.starts_with(&dot_marker) || line.starts_with(&paren_marker));

        match matched {
            Some(line) => {
                let content = line[dot_marker.len()..].trim();
                translations.push(content.to_string());
            }
            None if lines.len() >= index => {
                // No marker for this index; use the positional line instead
                let line = lines[index - 1];
                let content = NUMBERING_PREFIX_REGEX.replace(line, "");
                translations.push(content.trim().to_string());
            }
            None => {
                translations.push(format!("Translation {} not found", index));
            }
        }
    }

    // Belt and braces: the loop above always yields expected_count items,
    // but a short result must never escape this function
    while translations.len() < expected_count {
        translations.push(format!("Missing translation {}", translations.len() + 1));
    }

    translations
}
