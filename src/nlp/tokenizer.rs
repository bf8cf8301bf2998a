//! Word tokenization
//!
//! Terms are lowercased, matched with a word pattern that requires at least
//! one letter (purely numeric tokens never become terms), and filtered by
//! length and stopwords. The weighter and the scorer share this tokenizer so
//! sentence words and table keys agree.

use super::stopwords::StopwordFilter;
use once_cell::sync::Lazy;
use regex::Regex;

// A run of word characters containing at least one letter
static TERM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w*[^\W\d_]\w*\b").expect("Invalid term regex pattern"));

/// Minimum number of characters a term must have
pub const MIN_TERM_CHARS: usize = 2;

/// Splits text into normalized terms
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer with the English stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a custom stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize `text` into retained terms, in order of appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        TERM_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|term| self.is_retained(term))
            .map(str::to_string)
            .collect()
    }

    /// Whether an already-lowercased candidate survives filtering
    fn is_retained(&self, term: &str) -> bool {
        term.chars().count() >= MIN_TERM_CHARS && !self.stopwords.is_stopword(term)
    }
}
