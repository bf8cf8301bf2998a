//! Natural Language Processing components
//!
//! Sentence segmentation, word tokenization, and the language data both
//! rely on (abbreviations and stopwords).

pub mod abbreviations;
pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
