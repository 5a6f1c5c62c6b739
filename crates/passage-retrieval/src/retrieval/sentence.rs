//! Punctuation-aware sentence splitting
//!
//! Used at stage 2, where answers are returned verbatim and must read
//! naturally, so boundaries fall after `.`, `?`, or `!` followed by
//! whitespace. More precise than the chunk-level `". "` delimiter, still
//! naive about abbreviations.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentence-terminating punctuation followed by whitespace. The boundary
/// sits after the punctuation character, so it stays with its sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.?!]\s+").expect("sentence boundary pattern is valid")
});

/// Split `text` into sentences, dropping inter-sentence whitespace.
///
/// Text without any terminator comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0usize;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Punctuation is a single ASCII byte; keep it with the sentence
        let end = boundary.start() + 1;
        if end > start {
            sentences.push(&text[start..end]);
        }
        start = boundary.end();
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences.retain(|s| !s.trim().is_empty());
    sentences
}
