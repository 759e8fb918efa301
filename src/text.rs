//! Input text normalization and tokenization

use crate::error::{MatcherError, Result};
use regex::Regex;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Common filler words excluded from the meaningful-token count.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "in", "on", "at", "to", "for", "of", "with", "a", "an", "is", "are", "be",
    "as", "by", "from", "that", "this", "was", "were", "has", "have", "had", "will", "can", "our",
    "their", "its", "it", "we", "you", "they", "but", "not", "all", "any",
];

/// An input document carrying both its raw form and a normalized
/// derivative. Pattern matching runs against the normalized text;
/// metrics that need original casing or length use the raw text.
#[derive(Debug, Clone)]
pub struct DocumentText {
    raw: String,
    normalized: String,
}

impl DocumentText {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        Self {
            raw: raw.to_string(),
            normalized,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whitespace-delimited token count of the raw text.
    pub fn word_count(&self) -> usize {
        self.raw.split_whitespace().count()
    }
}

/// Lower-case and collapse all whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reject texts outside the accepted length range. The short-input
/// message is part of the wire contract.
pub fn validate_length(text: &str, min_chars: usize, max_chars: usize) -> Result<()> {
    let trimmed = text.trim();
    if trimmed.chars().count() < min_chars {
        return Err(MatcherError::Validation(format!(
            "Text must be at least {} characters long",
            min_chars
        )));
    }
    if trimmed.chars().count() > max_chars {
        return Err(MatcherError::Validation(format!(
            "Text must be at most {} characters long",
            max_chars
        )));
    }
    Ok(())
}

/// Texts below this many words are too short for frequency ratios to
/// mean anything and are exempt from the stuffing check.
const STUFFING_MIN_WORDS: usize = 10;

/// A single word longer than three characters may make up at most this
/// share of all tokens.
const STUFFING_MAX_WORD_SHARE: f32 = 0.2;

/// A run of this many identical characters marks generated filler.
const STUFFING_CHAR_RUN: usize = 11;

/// Detects keyword-stuffed or artificially generated resumes before
/// they reach scoring. A stuffed resume would otherwise inflate the
/// skills and semantic dimensions with repetition instead of content.
pub struct StuffingGuard {
    repeated_keywords: Regex,
}

impl StuffingGuard {
    pub fn new() -> Self {
        Self {
            // Three skill keywords back to back with nothing but
            // whitespace between them.
            repeated_keywords: Regex::new(
                r"(python|java|sql)\s*(python|java|sql)\s*(python|java|sql)",
            )
            .expect("repeated-keywords regex"),
        }
    }

    /// Runs on normalized text. Texts under the minimum word count
    /// always pass; beyond it, a dominant repeated word, a long
    /// identical-character run, or back-to-back skill keywords flag
    /// the text as stuffed.
    pub fn is_stuffed(&self, normalized: &str) -> bool {
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.len() < STUFFING_MIN_WORDS {
            return false;
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            if word.chars().count() > 3 {
                *counts.entry(word).or_insert(0) += 1;
            }
        }
        let total = words.len() as f32;
        if counts
            .values()
            .any(|count| *count as f32 / total > STUFFING_MAX_WORD_SHARE)
        {
            return true;
        }

        has_char_run(normalized, STUFFING_CHAR_RUN) || self.repeated_keywords.is_match(normalized)
    }
}

impl Default for StuffingGuard {
    fn default() -> Self {
        Self::new()
    }
}

fn has_char_run(text: &str, run_length: usize) -> bool {
    let mut previous = None;
    let mut run = 0;

    for ch in text.chars() {
        if Some(ch) == previous {
            run += 1;
            if run >= run_length {
                return true;
            }
        } else {
            previous = Some(ch);
            run = 1;
        }
    }

    false
}

/// Unicode word tokens of the given text, lower-cased.
pub fn tokens(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Tokens that carry information content: longer than two characters
/// and not a stop word.
pub fn is_meaningful(token: &str) -> bool {
    token.chars().count() > 2 && !is_stop_word(token)
}
