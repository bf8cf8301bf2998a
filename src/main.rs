//! tldr CLI - summarize a text file from the command line.
//!
//! # Usage
//!
//! ```bash
//! tldr article.txt                       # keep ~30% by term value
//! tldr article.txt -p 20 -m length       # keep ~20% of the characters
//! tldr article.txt -m best --json        # above-average sentences, as JSON
//! tldr article.txt --vocabulary news.jsonl --field content
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tldr::summarizer::read_document;
use tldr::weighting::corpus::DEFAULT_TEXT_FIELD;
use tldr::{ExternalCorpus, Percentage, SelectionMode, Summarizer, Summary, SummaryConfig};
use tracing_subscriber::EnvFilter;

/// Extractive summarizer.
///
/// Scores sentences by TF-IDF term weight (or length) and keeps the
/// highest-value ones, in document order.
#[derive(Parser)]
#[command(name = "tldr", version, about)]
struct Cli {
    /// Text file that will be summarized
    file: PathBuf,

    /// Target percentage of the document to keep (0-100)
    #[arg(short, long)]
    percentage: Option<String>,

    /// Selection mode: value, length or best
    #[arg(short, long)]
    mode: Option<String>,

    /// External corpus (CSV, JSON array or JSON Lines) to calibrate term weights
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Column or record field holding the text in the external corpus
    #[arg(long, default_value = DEFAULT_TEXT_FIELD)]
    field: String,

    /// JSON file with a summary configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: String,
    coverage: f64,
    mode: SelectionMode,
    sentences: Vec<JsonSentence<'a>>,
}

#[derive(Serialize)]
struct JsonSentence<'a> {
    index: usize,
    value: f64,
    text: &'a str,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info,tldr=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Validate parameters before touching any input
    let config = load_config(&cli)?;
    let summarizer = Summarizer::new(config)?;

    let text = read_document(&cli.file)?;

    let summary = match &cli.vocabulary {
        Some(path) => {
            let corpus = ExternalCorpus::from_path(path, &cli.field)?;
            tracing::info!(records = corpus.len(), "loaded vocabulary corpus");
            let vocabulary = summarizer.fit_vocabulary(&corpus)?;
            summarizer.summarize_with_vocabulary(&text, &vocabulary)?
        }
        None => summarizer.summarize(&text)?,
    };

    let output = if cli.json {
        format_json(&summary)?
    } else {
        format_human(&summary)
    };
    println!("{output}");

    Ok(())
}

/// Merge the config file (if any) with command-line overrides
fn load_config(cli: &Cli) -> Result<SummaryConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str(&source)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => SummaryConfig::default(),
    };

    if let Some(percentage) = &cli.percentage {
        config.percentage = percentage.parse::<Percentage>()?;
    }
    if let Some(mode) = &cli.mode {
        config.mode = mode.parse::<SelectionMode>()?;
    }
    Ok(config)
}

fn format_json(summary: &Summary) -> Result<String> {
    let output = JsonOutput {
        summary: summary.text(),
        coverage: summary.coverage,
        mode: summary.mode,
        sentences: summary
            .sentences
            .iter()
            .map(|s| JsonSentence {
                index: s.index(),
                value: s.value,
                text: s.sentence.text.trim(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn format_human(summary: &Summary) -> String {
    format!("{}\n\nCoverage: {:.2}%", summary.text(), summary.coverage)
}
