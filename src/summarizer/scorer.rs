//! Sentence scoring
//!
//! A sentence's value is the sum of the weights of its words, counting every
//! occurrence. In [`SelectionMode::Length`] the value is the sentence's
//! character length instead.

use crate::nlp::tokenizer::Tokenizer;
use crate::types::{ScoredSentence, SelectionMode, Sentence, TokenLookup};
use crate::weighting::table::TermWeightTable;

/// Values sentences against a term weight table
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer<'a> {
    table: &'a TermWeightTable,
    tokenizer: &'a Tokenizer,
    lookup: TokenLookup,
}

impl<'a> SentenceScorer<'a> {
    /// `tokenizer` must be the one that produced the table's terms
    pub fn new(table: &'a TermWeightTable, tokenizer: &'a Tokenizer) -> Self {
        Self {
            table,
            tokenizer,
            lookup: TokenLookup::Normalized,
        }
    }

    /// Set how sentence words are matched against the table
    pub fn with_lookup(mut self, lookup: TokenLookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Sum of term weights over the words of `sentence`
    pub fn score(&self, sentence: &Sentence) -> f64 {
        match self.lookup {
            TokenLookup::Normalized => self
                .tokenizer
                .tokenize(&sentence.text)
                .iter()
                .map(|term| self.table.weight(term))
                .sum(),
            TokenLookup::Whitespace => sentence
                .text
                .split_whitespace()
                .map(|word| self.table.weight(word))
                .sum(),
        }
    }

    /// Value every sentence for the given mode
    pub fn score_all(&self, sentences: &[Sentence], mode: SelectionMode) -> Vec<ScoredSentence> {
        sentences
            .iter()
            .map(|sentence| {
                let value = match mode {
                    SelectionMode::Value | SelectionMode::Best => self.score(sentence),
                    SelectionMode::Length => sentence.char_len() as f64,
                };
                ScoredSentence::new(value, sentence.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use rustc_hash::FxHashMap;

    fn table(pairs: &[(&str, f64)]) -> TermWeightTable {
        // Weights that are already unit-length stay unchanged.
        TermWeightTable::from_weights(
            pairs
                .iter()
                .map(|(t, w)| (t.to_string(), *w))
                .collect::<FxHashMap<_, _>>(),
        )
    }

    #[test]
    fn test_sums_every_occurrence() {
        let table = table(&[("rust", 0.6), ("cargo", 0.8)]);
        let tokenizer = Tokenizer::with_stopwords(StopwordFilter::empty());
        let scorer = SentenceScorer::new(&table, &tokenizer);

        let sentence = Sentence::new("Rust, rust and Cargo.", 0, 0, 21);
        assert!((scorer.score(&sentence) - (0.6 + 0.6 + 0.8)).abs() < 1e-12);
    }

    #[test]
    fn test_whitespace_lookup_misses_punctuated_words() {
        let table = table(&[("rust", 0.6), ("cargo", 0.8)]);
        let tokenizer = Tokenizer::with_stopwords(StopwordFilter::empty());
        let scorer = SentenceScorer::new(&table, &tokenizer).with_lookup(TokenLookup::Whitespace);

        // "Rust," and "Cargo." miss; only the bare "rust" matches.
        let sentence = Sentence::new("Rust, rust and Cargo.", 0, 0, 21);
        assert!((scorer.score(&sentence) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_words_score_zero() {
        let table = table(&[("rust", 1.0)]);
        let tokenizer = Tokenizer::new();
        let scorer = SentenceScorer::new(&table, &tokenizer);

        assert_eq!(scorer.score(&Sentence::new("Nothing relevant.", 0, 0, 17)), 0.0);
    }

    #[test]
    fn test_length_mode_uses_characters() {
        let table = table(&[("rust", 1.0)]);
        let tokenizer = Tokenizer::new();
        let scorer = SentenceScorer::new(&table, &tokenizer);

        let sentences = vec![
            Sentence::new("Rust.", 0, 0, 5),
            Sentence::new(" Café au lait.", 1, 5, 20),
        ];
        let scored = scorer.score_all(&sentences, SelectionMode::Length);

        assert_eq!(scored[0].value, 5.0);
        assert_eq!(scored[1].value, 14.0);
        assert_eq!(scored[1].index(), 1);
    }
}
