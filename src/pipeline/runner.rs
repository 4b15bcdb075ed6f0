//! Pipeline runner: runs the summarization stages in order.
//!
//! [`TextRankSummarizer`] holds the two collaborators (sentence splitter
//! and stopword provider) plus the configuration, and runs the stages in
//! order:
//!
//! | Stage | Output |
//! |-------|--------|
//! | `split` | `Vec<Sentence>` |
//! | `similarity` | [`SimilarityMatrix`] |
//! | `rank` | [`PageRankResult`] |
//! | `select` | [`Summary`] |
//!
//! Nothing is cached between calls; one summarizer can serve concurrent
//! requests.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::PageRankResult;
use crate::pipeline::traits::{SentenceSplitter, StopwordProvider};
use crate::summarizer::matrix::{SimilarityMatrix, SimilarityMatrixBuilder};
use crate::summarizer::ranker::CentralityRanker;
use crate::summarizer::selector::{Summary, SummarySelector};
use crate::types::{Sentence, SummaryConfig};
use tracing::debug;

pub const STAGE_SPLIT: &str = "split";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// TextRank summarizer composed of a sentence splitter and a stopword source.
#[derive(Debug, Clone)]
pub struct TextRankSummarizer<T = Tokenizer, S = StopwordFilter> {
    splitter: T,
    stopwords: S,
    config: SummaryConfig,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRankSummarizer {
    /// Built-in tokenizer, English stopwords, default config
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Built-in tokenizer with stopwords for `config.language`
    pub fn with_config(config: SummaryConfig) -> Self {
        let stopwords = StopwordFilter::new(&config.language);
        Self {
            splitter: Tokenizer::new(),
            stopwords,
            config,
        }
    }
}

impl<T, S> TextRankSummarizer<T, S>
where
    T: SentenceSplitter,
    S: StopwordProvider,
{
    /// Compose a summarizer from explicit collaborators
    pub fn from_parts(splitter: T, stopwords: S, config: SummaryConfig) -> Self {
        Self {
            splitter,
            stopwords,
            config,
        }
    }

    /// Replace the stopword source
    pub fn with_stopwords<S2: StopwordProvider>(self, stopwords: S2) -> TextRankSummarizer<T, S2> {
        TextRankSummarizer {
            splitter: self.splitter,
            stopwords,
            config: self.config,
        }
    }

    /// Replace the sentence splitter
    pub fn with_splitter<T2: SentenceSplitter>(self, splitter: T2) -> TextRankSummarizer<T2, S> {
        TextRankSummarizer {
            splitter,
            stopwords: self.stopwords,
            config: self.config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Split raw text into sentences
    pub fn split(&self, text: &str) -> Vec<Sentence> {
        trace_stage!(STAGE_SPLIT);
        let sentences = self.splitter.split(text);
        debug!(sentences = sentences.len(), "split text into sentences");
        sentences
    }

    /// Build the all-pairs similarity matrix
    pub fn similarity_matrix(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        trace_stage!(STAGE_SIMILARITY);
        SimilarityMatrixBuilder::new()
            .with_parallel_threshold(self.config.parallel_threshold)
            .build(sentences, &self.stopwords)
    }

    /// Score every sentence by centrality
    pub fn rank_sentences(&self, sentences: &[Sentence]) -> PageRankResult {
        let matrix = self.similarity_matrix(sentences);
        trace_stage!(STAGE_RANK);
        CentralityRanker::from_config(&self.config).rank(&matrix)
    }

    /// Summarize an already tokenized document
    pub fn summarize_sentences(&self, sentences: &[Sentence]) -> Summary {
        let ranking = self.rank_sentences(sentences);
        trace_stage!(STAGE_SELECT);
        let summary = SummarySelector::with_config(self.config.clone()).select(sentences, &ranking);
        debug!(
            selected = summary.len(),
            available = sentences.len(),
            "assembled summary"
        );
        summary
    }

    /// Summarize raw text
    pub fn summarize(&self, text: &str) -> Summary {
        let sentences = self.split(text);
        self.summarize_sentences(&sentences)
    }
}

/// Summarize `text` with the default English pipeline
pub fn summarize(text: &str) -> String {
    TextRankSummarizer::new().summarize(text).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::traits::NoStopwords;
    use crate::types::OutputOrder;
    use rustc_hash::FxHashSet;

    fn the_only() -> FxHashSet<String> {
        ["the".to_string()].into_iter().collect()
    }

    #[test]
    fn test_cat_example() {
        let summarizer = TextRankSummarizer::new().with_stopwords(the_only());
        let summary = summarizer.summarize("The cat sat. The cat slept. Dogs bark loudly.");

        let mut indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1]);
        assert!(!summary.as_str().contains("Dogs"));
    }

    #[test]
    fn test_empty_text() {
        let summary = TextRankSummarizer::new().summarize("");

        assert!(summary.is_empty());
        assert_eq!(summary.as_str(), "");
    }

    #[test]
    fn test_single_sentence_text() {
        assert_eq!(summarize("Just one sentence here."), "Just one sentence here.");
    }

    #[test]
    fn test_idempotent() {
        let text = "Rust is fast. Rust is safe. Python is slow. Safety matters in Rust. \
                    Speed matters too. Compilers help.";
        let summarizer = TextRankSummarizer::new();

        assert_eq!(summarizer.summarize(text), summarizer.summarize(text));
    }

    #[test]
    fn test_rank_sentences_sum_to_one() {
        let summarizer = TextRankSummarizer::new().with_stopwords(NoStopwords);
        let sentences = summarizer.split("A b c. B c d. C d e. X y z.");
        let ranking = summarizer.rank_sentences(&sentences);

        assert_eq!(ranking.len(), 4);
        let sum: f64 = ranking.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(ranking.scores.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_document_order_config() {
        let config = SummaryConfig::default().with_order(OutputOrder::Document);
        let summarizer = TextRankSummarizer::with_config(config).with_stopwords(the_only());
        let summary = summarizer.summarize("Dogs bark loudly. The cat sat. The cat slept.");

        assert_eq!(summary.as_str(), "The cat sat.. The cat slept.");
    }

    #[test]
    fn test_summarizer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextRankSummarizer>();
    }
}
