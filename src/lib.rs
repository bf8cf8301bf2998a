//! # tldr
//!
//! Extractive summarization of plain-text documents. Sentences are scored
//! by the TF-IDF weight of their terms (or by length) and a subset whose
//! combined value approximates a target fraction of the document is kept in
//! original order.
//!
//! ## Modules
//!
//! - [`nlp`] - Sentence segmentation, tokenization, abbreviations, stopwords
//! - [`weighting`] - TF-IDF vocabulary, term weight tables, external corpora
//! - [`summarizer`] - Sentence scoring, greedy selection, orchestration
//! - [`types`] - Sentences, selection modes, configuration, summaries
//! - [`errors`] - Error type and `Result` alias
//!
//! ## Example
//!
//! ```rust
//! let text = "Rust is fast. Rust is memory safe. The sky is blue.";
//! let (summary, coverage) = tldr::summarize(text, 50, "value", None)?;
//! assert!(!summary.is_empty());
//! assert!(coverage > 0.0);
//! # Ok::<(), tldr::TldrError>(())
//! ```

pub mod errors;
pub mod nlp;
pub mod summarizer;
pub mod types;
pub mod weighting;

pub use errors::{Result, TldrError};
pub use nlp::abbreviations::AbbreviationSet;
pub use nlp::segmenter::SentenceSegmenter;
pub use summarizer::{read_document, Summarizer};
pub use types::{
    Percentage, ScoredSentence, SelectionMode, Sentence, Summary, SummaryConfig, TokenLookup,
};
pub use weighting::corpus::ExternalCorpus;
pub use weighting::vocabulary::TermVocabulary;

/// Summarize `text`, keeping roughly `percentage`% of it
///
/// `mode` is one of `"value"`, `"length"` or `"best"`. Both parameters are
/// validated before any processing. With a `vocabulary`, term weights are
/// calibrated on that corpus instead of on the document itself.
///
/// Returns the assembled summary and the realized coverage percentage.
pub fn summarize(
    text: &str,
    percentage: i64,
    mode: &str,
    vocabulary: Option<&TermVocabulary>,
) -> Result<(String, f64)> {
    let percentage = Percentage::new(percentage)?;
    let mode: SelectionMode = mode.parse()?;

    let summarizer = Summarizer::new(
        SummaryConfig::default()
            .with_percentage(percentage)
            .with_mode(mode),
    )?;

    let summary = match vocabulary {
        Some(vocab) => summarizer.summarize_with_vocabulary(text, vocab)?,
        None => summarizer.summarize(text)?,
    };
    Ok((summary.text(), summary.coverage))
}
