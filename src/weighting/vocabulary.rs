//! TF-IDF vocabulary
//!
//! Fits smoothed inverse document frequencies over a corpus and projects
//! documents onto the fitted vocabulary:
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! weight(t) = count(t, doc) * idf(t), then L2-normalised
//! ```
//!
//! Fitting on the summarized document alone gives `idf = 1` for every term,
//! so weights reduce to normalised term frequency.
//!
//! Per-document term sets are tokenized on the rayon pool; the document
//! frequency merge is sequential, so a fitted vocabulary does not depend on
//! thread scheduling or on the order of the corpus records. Summarizing a
//! single document is otherwise single-threaded.

use super::corpus::ExternalCorpus;
use super::table::TermWeightTable;
use crate::errors::{Result, TldrError};
use crate::nlp::tokenizer::Tokenizer;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Vocabulary and IDF statistics fitted on a corpus
#[derive(Debug, Clone)]
pub struct TermVocabulary {
    tokenizer: Tokenizer,
    idf: FxHashMap<String, f64>,
    num_documents: usize,
}

impl TermVocabulary {
    /// Fit IDF statistics over `documents`
    ///
    /// Document frequencies are counted in parallel.
    pub fn fit<S>(tokenizer: Tokenizer, documents: &[S]) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        if documents.is_empty() {
            return Err(TldrError::invalid_config(
                "cannot fit a vocabulary on an empty corpus",
            ));
        }

        // Distinct terms per document, in parallel
        let per_document: Vec<FxHashSet<String>> = documents
            .par_iter()
            .map(|doc| tokenizer.tokenize(doc.as_ref()).into_iter().collect())
            .collect();

        let mut document_frequency: FxHashMap<String, usize> = FxHashMap::default();
        for terms in per_document {
            for term in terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(term, df)| (term, ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
            .collect::<FxHashMap<_, _>>();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            documents = documents.len(),
            terms = idf.len(),
            "fitted term vocabulary"
        );

        Ok(Self {
            tokenizer,
            idf,
            num_documents: documents.len(),
        })
    }

    /// Fit on the records of an external corpus
    pub fn from_corpus(tokenizer: Tokenizer, corpus: &ExternalCorpus) -> Result<Self> {
        Self::fit(tokenizer, corpus.records())
    }

    /// Weight a document against this vocabulary (transform, not fit)
    ///
    /// Terms outside the vocabulary are dropped.
    pub fn transform(&self, text: &str) -> TermWeightTable {
        let mut counts: FxHashMap<String, f64> = FxHashMap::default();
        for term in self.tokenizer.tokenize(text) {
            if self.idf.contains_key(&term) {
                *counts.entry(term).or_insert(0.0) += 1.0;
            }
        }

        for (term, weight) in counts.iter_mut() {
            *weight *= self.idf[term];
        }

        TermWeightTable::from_weights(counts)
    }

    /// Fit on `text` alone and weight it (a corpus of one)
    pub fn fit_transform(tokenizer: Tokenizer, text: &str) -> Result<TermWeightTable> {
        Ok(Self::fit(tokenizer, &[text])?.transform(text))
    }

    /// The tokenizer shared with sentence scoring
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Inverse document frequency of a term, if in the vocabulary
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    /// Number of documents the vocabulary was fitted on
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }
}
