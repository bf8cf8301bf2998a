//! Sentence segmentation
//!
//! Splits a document into sentences in two passes:
//!
//! 1. **Coarse split** on `.`: fragments that are too short to be sentences
//!    (`...`, the `m` of `p.m.`) and decimal fractions are glued back onto the
//!    preceding sentence.
//! 2. **Abbreviation fix-up**: a sentence whose last token is a known
//!    abbreviation (`Dr.`, `etc.`, `U.S.`) does not terminate, so the next
//!    sentence is merged onto it.
//!
//! Segmentation is lossless: concatenating the produced sentence texts gives
//! back the cleaned document, plus a synthetic final period when the document
//! does not end with one.

use super::abbreviations::AbbreviationSet;
use crate::types::Sentence;

/// Remove line breaks from raw document text
///
/// Lines are joined without inserting whitespace.
pub fn clean_document(raw: &str) -> String {
    raw.replace(['\r', '\n'], "")
}

/// Accumulates sentence text, holding one in-progress sentence at a time
#[derive(Debug, Default)]
struct SentenceBuilder {
    current: Option<Sentence>,
    finished: Vec<Sentence>,
}

impl SentenceBuilder {
    /// Finalize the in-progress sentence and start a new one
    fn start(&mut self, text: &str, start: usize, end: usize) {
        self.flush();
        self.current = Some(Sentence::new(text, self.finished.len(), start, end));
    }

    /// Append to the in-progress sentence, or start one if there is none
    fn append(&mut self, text: &str, end: usize) {
        match self.current.as_mut() {
            Some(sentence) => {
                sentence.text.push_str(text);
                sentence.end = end;
            }
            None => {
                let start = end.saturating_sub(text.len());
                self.start(text, start, end);
            }
        }
    }

    fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Text of the in-progress sentence, or `""`
    fn current_text(&self) -> &str {
        self.current.as_ref().map_or("", |s| s.text.as_str())
    }

    fn flush(&mut self) {
        if let Some(sentence) = self.current.take() {
            self.finished.push(sentence);
        }
    }

    fn finish(mut self) -> Vec<Sentence> {
        self.flush();
        self.finished
    }
}

/// Splits text into sentences, honouring an injectable abbreviation set
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    abbreviations: AbbreviationSet,
}

impl SentenceSegmenter {
    /// Create a segmenter with the English abbreviation set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with a custom abbreviation set
    pub fn with_abbreviations(abbreviations: AbbreviationSet) -> Self {
        Self { abbreviations }
    }

    /// The abbreviation set in use
    pub fn abbreviations(&self) -> &AbbreviationSet {
        &self.abbreviations
    }

    /// Segment an already-cleaned document into sentences
    ///
    /// Whitespace-only input yields no sentences.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let coarse = Self::coarse_split(text);
        self.merge_abbreviations(coarse)
    }

    /// Pass 1: split on periods and re-attach non-terminal fragments
    fn coarse_split(text: &str) -> Vec<Sentence> {
        let fragments: Vec<&str> = text.split('.').collect();
        let last = fragments.len() - 1;

        let mut builder = SentenceBuilder::default();
        let mut pending_dot = false;
        let mut pos = 0;

        for (i, fragment) in fragments.iter().enumerate() {
            let start = pos;
            let trimmed_len = fragment.trim().chars().count();

            // Each fragment but the last was followed by a period in the source.
            let (piece, end) = if i < last {
                pos += fragment.len() + 1;
                (format!("{fragment}."), pos)
            } else if trimmed_len > 0 {
                pos += fragment.len();
                (format!("{fragment}."), pos)
            } else {
                // Trailing whitespace after the final period: keep it, no new sentence.
                if builder.has_current() {
                    builder.append(fragment, start + fragment.len());
                }
                break;
            };

            if i == 0 || !builder.has_current() {
                builder.start(&piece, start, end);
            } else if trimmed_len <= 1 {
                builder.append(&piece, end);
                if trimmed_len == 1 {
                    pending_dot = true;
                }
            } else if pending_dot || is_decimal_continuation(builder.current_text(), fragment) {
                builder.append(&piece, end);
                pending_dot = false;
            } else {
                builder.start(&piece, start, end);
            }
        }

        builder.finish()
    }

    /// Pass 2: merge the sentence after an abbreviation onto it
    fn merge_abbreviations(&self, coarse: Vec<Sentence>) -> Vec<Sentence> {
        let mut builder = SentenceBuilder::default();
        let mut pending_merge = false;

        for sentence in coarse {
            if pending_merge && builder.has_current() {
                builder.append(&sentence.text, sentence.end);
            } else {
                builder.start(&sentence.text, sentence.start, sentence.end);
            }
            pending_merge = self.abbreviations.ends_with_abbreviation(&sentence.text);
        }

        builder.finish()
    }
}

/// `"… 3."` followed directly by `"14 …"` is one number, not a boundary
fn is_decimal_continuation(current: &str, fragment: &str) -> bool {
    let before_dot = current.strip_suffix('.').unwrap_or(current);
    let ends_with_digit = before_dot.chars().next_back().is_some_and(|c| c.is_ascii_digit());
    let starts_with_digit = fragment.chars().next().is_some_and(|c| c.is_ascii_digit());
    ends_with_digit && starts_with_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = SentenceSegmenter::new().segment("One fish. Two fish. Red fish.");

        assert_eq!(texts(&sentences), vec!["One fish.", " Two fish.", " Red fish."]);
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_abbreviations_and_time() {
        let text = "Dr. Smith went home. He left at 5 p.m. today.";
        let sentences = SentenceSegmenter::new().segment(text);

        assert_eq!(
            texts(&sentences),
            vec!["Dr. Smith went home.", " He left at 5 p.m. today."]
        );
    }

    #[test]
    fn test_abbreviation_mid_document() {
        let text = "Hello world. I met Dr. Jones today. It rained.";
        let sentences = SentenceSegmenter::new().segment(text);

        assert_eq!(
            texts(&sentences),
            vec!["Hello world.", " I met Dr. Jones today.", " It rained."]
        );
    }

    #[test]
    fn test_injected_abbreviations() {
        let text = "Call ext. five now. Done.";

        let default = SentenceSegmenter::new().segment(text);
        assert_eq!(default.len(), 3);

        let custom =
            SentenceSegmenter::with_abbreviations(AbbreviationSet::from_list(&["ext."]))
                .segment(text);
        assert_eq!(texts(&custom), vec!["Call ext. five now.", " Done."]);
    }

    #[test]
    fn test_empty_abbreviation_set_splits_titles() {
        let segmenter = SentenceSegmenter::with_abbreviations(AbbreviationSet::empty());
        let sentences = segmenter.segment("Dr. Smith went home.");

        assert_eq!(texts(&sentences), vec!["Dr.", " Smith went home."]);
    }

    #[test]
    fn test_initialisms() {
        let sentences = SentenceSegmenter::new().segment("The U.S. economy grew. Markets rose.");

        assert_eq!(
            texts(&sentences),
            vec!["The U.S. economy grew.", " Markets rose."]
        );
    }

    #[test]
    fn test_ellipsis_stays_attached() {
        let sentences = SentenceSegmenter::new().segment("Wait... what happened. Nothing.");

        assert_eq!(sentences[0].text, "Wait...");
        assert_eq!(texts(&sentences).concat(), "Wait... what happened. Nothing.");
    }

    #[test]
    fn test_decimal_numbers() {
        let sentences = SentenceSegmenter::new().segment("Pi is 3.14 roughly. It is irrational.");

        assert_eq!(
            texts(&sentences),
            vec!["Pi is 3.14 roughly.", " It is irrational."]
        );
    }

    #[test]
    fn test_no_period_gets_synthetic_one() {
        let sentences = SentenceSegmenter::new().segment("no terminal punctuation here");

        assert_eq!(texts(&sentences), vec!["no terminal punctuation here."]);
        assert_eq!(sentences[0].start, 0);
        assert_eq!(sentences[0].end, "no terminal punctuation here".len());
    }

    #[test]
    fn test_no_trailing_empty_sentence() {
        let sentences = SentenceSegmenter::new().segment("First. Second.   ");

        assert_eq!(texts(&sentences), vec!["First.", " Second.   "]);
    }

    #[test]
    fn test_round_trip_and_offsets() {
        let text = "Mr. Brown paid $3.50 for tea. It was 4 p.m. on a Sunday... Odd, no? Yes";
        let sentences = SentenceSegmenter::new().segment(text);

        let joined: String = texts(&sentences).concat();
        assert_eq!(joined, format!("{text}."));

        for s in &sentences {
            let source = &text[s.start..s.end];
            assert!(s.text.starts_with(source));
        }
        assert_eq!(sentences.last().map(|s| s.end), Some(text.len()));
    }

    #[test]
    fn test_blank_input() {
        assert!(SentenceSegmenter::new().segment("").is_empty());
        assert!(SentenceSegmenter::new().segment("   ").is_empty());
    }

    #[test]
    fn test_clean_document() {
        assert_eq!(clean_document("line one\nline two\r\n"), "line oneline two");
    }
}
