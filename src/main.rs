use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use sentence_rank::{OutputOrder, SummaryConfig, TextRankSummarizer};
use serde::Serialize;
use tracing::info;

/// Summarize a text file with TextRank.
///
/// Ranks sentences by their similarity to the rest of the document and
/// prints the most central ones.
#[derive(Parser)]
#[command(name = "sentence-rank", version, about)]
struct Cli {
    /// Text file to summarize (reads stdin when omitted or "-")
    file: Option<PathBuf>,

    /// JSON config file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stopword language (e.g. en, de, fr)
    #[arg(long)]
    language: Option<String>,

    /// Sentences to select for short documents
    #[arg(long)]
    top_n: Option<usize>,

    /// Output order: rank or document
    #[arg(long)]
    order: Option<OutputOrder>,

    /// Reject documents with more sentences than this
    #[arg(long)]
    max_sentences: Option<usize>,

    /// Print the selected sentences and scores as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    sentence_count: usize,
    summary: &'a sentence_rank::Summary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sentence_rank=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let text = read_input(cli.file.as_deref(), std::io::stdin().lock())?;

    let summarizer = TextRankSummarizer::with_config(config);
    let sentences = summarizer.split(&text);
    info!(sentences = sentences.len(), "read document");

    check_sentence_limit(sentences.len(), cli.max_sentences)?;

    let summary = summarizer.summarize_sentences(&sentences);

    if cli.json {
        let output = JsonOutput {
            sentence_count: sentences.len(),
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{summary}");
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<SummaryConfig> {
    let mut config = match &cli.config {
        Some(path) => SummaryConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SummaryConfig::default(),
    };

    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(top_n) = cli.top_n {
        config.default_top_n = top_n;
    }
    if let Some(order) = cli.order {
        config.order = order;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn check_sentence_limit(count: usize, max_sentences: Option<usize>) -> Result<()> {
    match max_sentences {
        Some(max) if count > max => {
            bail!("document has {count} sentences, more than the allowed {max}")
        }
        _ => Ok(()),
    }
}

/// Read the document from `file`, or from `stdin` when absent or "-"
fn read_input(file: Option<&Path>, mut stdin: impl Read) -> Result<String> {
    let bytes = match file {
        Some(path) if path.as_os_str() != "-" => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
