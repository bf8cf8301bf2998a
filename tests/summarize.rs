//! End-to-end tests through the public API.

use pretty_assertions::assert_eq;
use std::io::Write;
use tldr::summarizer::scorer::SentenceScorer;
use tldr::{
    summarize, ExternalCorpus, Percentage, SelectionMode, SentenceSegmenter, Summarizer,
    SummaryConfig, TldrError,
};

const ARTICLE: &str = "The compiler rejected the program. \
    Dr. Matsakis explained the borrow checker to the team at 3 p.m. on Friday. \
    The borrow checker tracks lifetimes so the compiler can prove memory safety. \
    Lunch was served afterwards. \
    Memory safety without a garbage collector is the point of the borrow checker.";

#[test]
fn segments_article_around_abbreviations() {
    let sentences = SentenceSegmenter::new().segment(ARTICLE);
    let texts: Vec<&str> = sentences.iter().map(|s| s.text.trim()).collect();

    assert_eq!(
        texts,
        vec![
            "The compiler rejected the program.",
            "Dr. Matsakis explained the borrow checker to the team at 3 p.m. on Friday.",
            "The borrow checker tracks lifetimes so the compiler can prove memory safety.",
            "Lunch was served afterwards.",
            "Memory safety without a garbage collector is the point of the borrow checker.",
        ]
    );
}

#[test]
fn required_two_sentence_example() {
    let sentences =
        SentenceSegmenter::new().segment("Dr. Smith went home. He left at 5 p.m. today.");
    assert_eq!(sentences.len(), 2);
}

#[test]
fn summarize_returns_text_and_coverage() {
    let (text, coverage) = summarize(ARTICLE, 40, "value", None).unwrap();

    assert!(text.contains("borrow checker"));
    assert!(!text.contains("Lunch"));
    assert!(coverage > 0.0 && coverage <= 100.0);
}

#[test]
fn summarize_validates_before_processing() {
    let err = summarize(ARTICLE, 101, "value", None).unwrap_err();
    assert!(matches!(err, TldrError::OutOfRange { value: 101, .. }));
    assert!(err.is_validation());

    let err = summarize(ARTICLE, 30, "longest", None).unwrap_err();
    assert!(matches!(err, TldrError::UnknownMode(_)));

    for mode in ["Value ", "BEST", " length"] {
        let err = summarize("x", 30, mode, None).unwrap_err();
        assert!(matches!(err, TldrError::UnknownMode(ref m) if m == mode));
    }

    // Validation wins even when the document is degenerate
    let err = summarize("", -5, "value", None).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn summarize_rejects_empty_document() {
    let err = summarize("   ", 30, "value", None).unwrap_err();
    assert!(matches!(err, TldrError::DegenerateInput(_)));
}

#[test]
fn best_mode_selects_above_average_sentences() {
    let summarizer =
        Summarizer::new(SummaryConfig::default().with_mode(SelectionMode::Best)).unwrap();
    let summary = summarizer.summarize(ARTICLE).unwrap();

    assert!(!summary.is_empty());
    assert!(!summary.indices().contains(&3));
    assert!(summary.sentences.iter().all(|s| s.value > 0.0));
}

#[test]
fn length_mode_coverage_counts_characters() {
    let config = SummaryConfig::default()
        .with_mode(SelectionMode::Length)
        .with_percentage(Percentage::new(100).unwrap());
    let summary = Summarizer::new(config).unwrap().summarize(ARTICLE).unwrap();

    assert_eq!(summary.len(), 5);
    assert!((summary.coverage - 100.0).abs() < 1e-9);
}

#[test]
fn zero_percent_policy_is_configurable() {
    let keep_one = SummaryConfig::default().with_percentage(Percentage::new(0).unwrap());
    let summary = Summarizer::new(keep_one.clone())
        .unwrap()
        .summarize(ARTICLE)
        .unwrap();
    assert_eq!(summary.len(), 1);

    let allow_empty = keep_one.with_at_least_one(false);
    let summary = Summarizer::new(allow_empty)
        .unwrap()
        .summarize(ARTICLE)
        .unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.text(), "");
    assert_eq!(summary.coverage, 0.0);
}

#[test]
fn external_vocabulary_zeroes_unknown_terms() {
    let corpus = ExternalCorpus::from_records([
        "the compiler checks types",
        "a garbage collector reclaims memory",
    ]);
    let summarizer = Summarizer::new(SummaryConfig::default()).unwrap();
    let vocabulary = summarizer.fit_vocabulary(&corpus).unwrap();

    let doc = "Ferris ferris ferris ferris ferris. The compiler checks memory.";
    let table = vocabulary.transform(doc);
    assert_eq!(table.weight("ferris"), 0.0);

    let sentences = SentenceSegmenter::new().segment(doc);
    let scored = SentenceScorer::new(&table, vocabulary.tokenizer())
        .score_all(&sentences, SelectionMode::Value);
    assert_eq!(scored[0].value, 0.0);
    assert!(scored[1].value > 0.0);

    let (text, coverage) = summarize(doc, 50, "value", Some(&vocabulary)).unwrap();
    assert_eq!(text, "The compiler checks memory.");
    assert!((coverage - 100.0).abs() < 1e-9);
}

#[test]
fn vocabulary_loaded_from_json_lines_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"content": "borrow checker lifetimes", "id": 1}}"#).unwrap();
    writeln!(file, r#"{{"content": "garbage collector pauses", "id": 2}}"#).unwrap();

    let corpus = ExternalCorpus::from_path(file.path(), "content").unwrap();
    let vocabulary = Summarizer::new(SummaryConfig::default())
        .unwrap()
        .fit_vocabulary(&corpus)
        .unwrap();
    assert_eq!(vocabulary.num_documents(), 2);

    let err = ExternalCorpus::from_path(file.path(), "body").unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn document_read_failure_is_io_error() {
    let err = tldr::read_document("/nonexistent/dir/article.txt").unwrap_err();
    assert!(matches!(err, TldrError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read /nonexistent/dir/article.txt"));
}

#[test]
fn config_loaded_from_json() {
    let config: SummaryConfig = serde_json::from_str(
        r#"{"percentage": 60, "mode": "length", "at_least_one": false, "token_lookup": "whitespace"}"#,
    )
    .unwrap();

    let summary = Summarizer::new(config).unwrap().summarize(ARTICLE).unwrap();
    assert_eq!(summary.mode, SelectionMode::Length);
    assert!(!summary.is_empty());
}
