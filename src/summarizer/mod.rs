//! Summarization components
//!
//! [`Summarizer`] runs the pipeline
//! `clean -> segment -> weight -> score -> select`, producing a [`Summary`]
//! whose [`Summary::text`] is the assembled extract.

pub mod scorer;
pub mod selector;

use crate::errors::{Result, TldrError};
use crate::nlp::abbreviations::AbbreviationSet;
use crate::nlp::segmenter::{clean_document, SentenceSegmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{SelectionMode, Sentence, Summary, SummaryConfig};
use crate::weighting::corpus::ExternalCorpus;
use crate::weighting::table::TermWeightTable;
use crate::weighting::vocabulary::TermVocabulary;
use scorer::SentenceScorer;
use selector::{SelectorConfig, SummarySelector};
use std::path::Path;

/// Enter a tracing span for a summarization stage (when the `tracing`
/// feature is enabled). When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

/// Heaviest terms reported in the weighting debug event
#[cfg(feature = "tracing")]
const LOGGED_TOP_TERMS: usize = 5;

/// Read a document from disk
///
/// Failures carry the path as [`TldrError::Io`].
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| TldrError::io(path, e))
}

/// Extractive summarizer configured once and reusable across documents
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummaryConfig,
    segmenter: SentenceSegmenter,
    tokenizer: Tokenizer,
}

impl Summarizer {
    /// Build a summarizer, validating the configuration
    pub fn new(config: SummaryConfig) -> Result<Self> {
        config.validate()?;

        let mut abbreviations = AbbreviationSet::english();
        abbreviations.extend(&config.extra_abbreviations);

        let mut stopwords = StopwordFilter::english();
        stopwords.add_stopwords(&config.extra_stopwords);

        Ok(Self {
            segmenter: SentenceSegmenter::with_abbreviations(abbreviations),
            tokenizer: Tokenizer::with_stopwords(stopwords),
            config,
        })
    }

    /// Replace the segmenter (e.g. with a custom abbreviation set)
    pub fn with_segmenter(mut self, segmenter: SentenceSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Replace the tokenizer used for weighting and scoring
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Fit an external vocabulary with this summarizer's tokenizer
    pub fn fit_vocabulary(&self, corpus: &ExternalCorpus) -> Result<TermVocabulary> {
        TermVocabulary::from_corpus(self.tokenizer.clone(), corpus)
    }

    /// Summarize with weights calibrated on the document itself
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.run(text, None)
    }

    /// Summarize with weights calibrated on an external vocabulary
    ///
    /// Terms the vocabulary has never seen contribute nothing.
    pub fn summarize_with_vocabulary(
        &self,
        text: &str,
        vocabulary: &TermVocabulary,
    ) -> Result<Summary> {
        self.run(text, Some(vocabulary))
    }

    fn run(&self, raw: &str, vocabulary: Option<&TermVocabulary>) -> Result<Summary> {
        let document = clean_document(raw);
        if document.trim().is_empty() {
            return Err(TldrError::degenerate("document is empty"));
        }

        let sentences = {
            trace_stage!("segment");
            self.segmenter.segment(&document)
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(sentences = sentences.len(), "segmented document");

        let mode = self.config.mode;
        let (table, tokenizer) = {
            trace_stage!("weight");
            match (mode, vocabulary) {
                // Length mode never consults term weights
                (SelectionMode::Length, _) => (TermWeightTable::new(), &self.tokenizer),
                (_, Some(vocab)) => (vocab.transform(&document), vocab.tokenizer()),
                (_, None) => (
                    TermVocabulary::fit_transform(self.tokenizer.clone(), &document)?,
                    &self.tokenizer,
                ),
            }
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            terms = table.len(),
            norm = table.norm(),
            top = ?table.top_terms(LOGGED_TOP_TERMS),
            "weighted terms"
        );

        let scored = {
            trace_stage!("score");
            SentenceScorer::new(&table, tokenizer)
                .with_lookup(self.config.token_lookup)
                .score_all(&sentences, mode)
        };

        trace_stage!("select");
        SummarySelector::with_config(SelectorConfig {
            percentage: self.config.percentage,
            mode,
            at_least_one: self.config.at_least_one,
        })
        .select(scored)
    }

    /// Segment a document the way [`Summarizer::summarize`] does
    pub fn sentences(&self, raw: &str) -> Vec<Sentence> {
        self.segmenter.segment(&clean_document(raw))
    }
}
