//! Term weighting
//!
//! TF-IDF weights per term, either calibrated on the document itself (a
//! corpus of one) or on an external corpus whose vocabulary is fitted once
//! and reused across documents.
//!
//! With an external vocabulary, terms the corpus never saw get no weight at
//! all: they are invisible to sentence scoring even if the target document
//! repeats them often. This keeps document vectors comparable across runs
//! against the same corpus at the cost of ignoring novel terms.

pub mod corpus;
pub mod table;
pub mod vocabulary;
