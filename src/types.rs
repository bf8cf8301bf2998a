//! Core types for tldr
//!
//! This module defines the data structures shared across the pipeline:
//! sentences, scored sentences, selection modes, configuration, and the
//! final summary.

use crate::errors::{Result, TldrError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
///
/// The text keeps its original delimiter(s) and any leading whitespace, so
/// concatenating every sentence of a document reproduces the cleaned source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, including trailing punctuation
    pub text: String,
    /// Sentence index within the document (0-based)
    pub index: usize,
    /// Start byte offset in the cleaned document
    pub start: usize,
    /// End byte offset in the cleaned document (excludes a synthetic period)
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }

    /// Length in characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A sentence paired with the value the selector ranks it by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// Sum of term weights, or character length in [`SelectionMode::Length`]
    pub value: f64,
    /// The underlying sentence
    pub sentence: Sentence,
}

impl ScoredSentence {
    pub fn new(value: f64, sentence: Sentence) -> Self {
        Self { value, sentence }
    }

    /// Original position of the sentence in the document
    pub fn index(&self) -> usize {
        self.sentence.index
    }
}

// ============================================================================
// Selection mode
// ============================================================================

/// How sentences are valued and how much of the document is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Keep `percentage`% of the summed sentence values
    #[default]
    Value,
    /// Keep `percentage`% of the document's characters
    Length,
    /// Keep every sentence whose value is at least the mean (percentage ignored)
    Best,
}

impl SelectionMode {
    /// The user-facing literal for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionMode::Value => "value",
            SelectionMode::Length => "length",
            SelectionMode::Best => "best",
        }
    }
}

impl FromStr for SelectionMode {
    type Err = TldrError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "value" => Ok(SelectionMode::Value),
            "length" => Ok(SelectionMode::Length),
            "best" => Ok(SelectionMode::Best),
            _ => Err(TldrError::UnknownMode(value.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Percentage
// ============================================================================

/// A validated integer percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 100;

    /// Validate an integer percentage
    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(TldrError::OutOfRange {
                field: "percentage",
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Percentage(value as u8))
    }

    /// The raw value
    pub fn get(self) -> u8 {
        self.0
    }

    /// The percentage as a fraction in `0.0..=1.0`
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage(30)
    }
}

impl TryFrom<i64> for Percentage {
    type Error = TldrError;

    fn try_from(value: i64) -> Result<Self> {
        Percentage::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> u8 {
        p.0
    }
}

impl FromStr for Percentage {
    type Err = TldrError;

    /// Parse textual input: non-integers are a type mismatch, integers
    /// outside `0..=100` are out of range.
    fn from_str(value: &str) -> Result<Self> {
        let parsed: i64 = value.trim().parse().map_err(|_| TldrError::TypeMismatch {
            field: "percentage",
            expected: "an integer",
            value: value.to_string(),
        })?;
        Percentage::new(parsed)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ============================================================================
// Token lookup
// ============================================================================

/// How the scorer maps sentence words onto the term weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenLookup {
    /// Tokenize sentences exactly like the weighter does
    #[default]
    Normalized,
    /// Split on whitespace and look words up verbatim
    ///
    /// Words carrying capitals or trailing punctuation miss the table.
    Whitespace,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Target fraction of the document to keep
    pub percentage: Percentage,
    /// Valuation and stopping strategy
    pub mode: SelectionMode,
    /// Always keep the top-ranked sentence, even when the target is zero
    pub at_least_one: bool,
    /// Sentence word lookup strategy
    pub token_lookup: TokenLookup,
    /// Abbreviations added to the default set (e.g. `"approx."`)
    pub extra_abbreviations: Vec<String>,
    /// Stopwords added to the English list
    pub extra_stopwords: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            percentage: Percentage::default(),
            mode: SelectionMode::Value,
            at_least_one: true,
            token_lookup: TokenLookup::Normalized,
            extra_abbreviations: Vec::new(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for abbr in &self.extra_abbreviations {
            let trimmed = abbr.trim();
            if trimmed.len() < 2 || !trimmed.ends_with('.') {
                return Err(TldrError::invalid_config(format!(
                    "abbreviation must be a word ending with '.', got {abbr:?}"
                )));
            }
            if trimmed.contains(char::is_whitespace) {
                return Err(TldrError::invalid_config(format!(
                    "abbreviation must be a single token, got {abbr:?}"
                )));
            }
        }

        if self.extra_stopwords.iter().any(|w| w.trim().is_empty()) {
            return Err(TldrError::invalid_config("stopwords must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set target percentage
    pub fn with_percentage(mut self, percentage: Percentage) -> Self {
        self.percentage = percentage;
        self
    }

    /// Builder method: set selection mode
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: guarantee at least one selected sentence
    pub fn with_at_least_one(mut self, at_least_one: bool) -> Self {
        self.at_least_one = at_least_one;
        self
    }

    /// Builder method: set sentence word lookup
    pub fn with_token_lookup(mut self, lookup: TokenLookup) -> Self {
        self.token_lookup = lookup;
        self
    }

    /// Builder method: extend the abbreviation set
    pub fn with_extra_abbreviations(mut self, words: &[&str]) -> Self {
        self.extra_abbreviations
            .extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Builder method: extend the stopword list
    pub fn with_extra_stopwords(mut self, words: &[&str]) -> Self {
        self.extra_stopwords.extend(words.iter().map(|w| w.to_string()));
        self
    }
}

// ============================================================================
// Summary
// ============================================================================

/// The outcome of a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order
    pub sentences: Vec<ScoredSentence>,
    /// Selected contribution as a percentage of the document total
    pub coverage: f64,
    /// Mode the summary was produced with
    pub mode: SelectionMode,
}

impl Summary {
    /// Assemble the selected sentences into a single string
    ///
    /// Sentences are trimmed and joined by a single space.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Original indices of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index()).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
