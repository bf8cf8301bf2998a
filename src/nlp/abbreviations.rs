//! Abbreviations that end with a period without ending a sentence
//!
//! The set is plain data handed to the segmenter, so callers can swap it for
//! a domain-specific list or extend the English default.

use rustc_hash::FxHashSet;

/// English words that legitimately end with a period mid-sentence
pub const ENGLISH_ABBREVIATIONS: &[&str] = &[
    // Titles
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "rev.", "gen.", "gov.", "sen.",
    "rep.", "capt.", "col.", "lt.", "sgt.", "hon.",
    // Latin and editorial
    "etc.", "e.g.", "i.e.", "vs.", "cf.", "al.", "approx.", "ca.", "viz.",
    // Places and organisations
    "u.s.", "u.k.", "u.n.", "e.u.", "inc.", "ltd.", "co.", "corp.", "dept.", "univ.", "ave.",
    "blvd.", "rd.", "mt.",
    // Time
    "a.m.", "p.m.", "jan.", "feb.", "mar.", "apr.", "jun.", "jul.", "aug.", "sep.", "sept.",
    "oct.", "nov.", "dec.", "mon.", "tue.", "wed.", "thu.", "fri.", "sat.", "sun.",
    // References
    "no.", "nos.", "vol.", "fig.", "figs.", "p.", "pp.", "ch.", "sec.", "ed.", "eds.", "est.",
];

/// A lookup set of abbreviations (lowercase, period-terminated)
#[derive(Debug, Clone)]
pub struct AbbreviationSet {
    words: FxHashSet<String>,
}

impl Default for AbbreviationSet {
    fn default() -> Self {
        Self::english()
    }
}

impl AbbreviationSet {
    /// The English default: common abbreviations plus single-letter initials
    pub fn english() -> Self {
        let mut words: FxHashSet<String> =
            ENGLISH_ABBREVIATIONS.iter().map(|w| w.to_string()).collect();
        words.extend(('a'..='z').map(|c| format!("{c}.")));
        Self { words }
    }

    /// An empty set; every period-terminated token ends its sentence
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let mut set = Self::empty();
        set.extend(words.iter().copied());
        set
    }

    /// Add abbreviations to the set
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().trim().to_lowercase());
        }
    }

    /// Check whether `token` is a known abbreviation (case-insensitive)
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.trim().to_lowercase())
    }

    /// Whether the last whitespace-delimited token of `text` is an abbreviation
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        text.split_whitespace()
            .next_back()
            .is_some_and(|last| self.contains(last))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
