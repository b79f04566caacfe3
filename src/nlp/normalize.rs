//! Text canonicalisation applied before any feature extraction.

/// Lower-case `text`, collapse whitespace runs to single spaces and trim.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace separated words in the raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
