//! Core types for sentence_rank
//!
//! This module defines the sentence representation that flows through the
//! pipeline and the configuration shared by all stages.

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Sentence
// ============================================================================

/// A tokenized sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence index within the document
    pub index: usize,
    /// The original surface text, used when assembling the summary
    pub text: String,
    /// Lower-cased word tokens
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence, lower-casing its tokens
    pub fn new<I, T>(index: usize, text: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            index,
            text: text.into(),
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of word tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no word tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ============================================================================
// Output Order
// ============================================================================

/// Order in which selected sentences appear in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Highest-scoring sentence first
    #[default]
    Rank,
    /// Original document position
    Document,
}

impl OutputOrder {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "document" | "doc" | "position" => OutputOrder::Document,
            _ => OutputOrder::Rank,
        }
    }
}

impl std::str::FromStr for OutputOrder {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(OutputOrder::parse(value))
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sentence ranking and summary assembly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummaryConfig {
    /// PageRank damping factor
    pub damping: f64,
    /// Maximum PageRank iterations before falling back to uniform scores
    pub max_iterations: usize,
    /// Per-node convergence tolerance; the L1 delta is compared to `n * tolerance`
    pub tolerance: f64,
    /// Sentences selected for documents up to `long_document_threshold`
    pub default_top_n: usize,
    /// Documents with more sentences than this get proportional summaries
    pub long_document_threshold: usize,
    /// One summary sentence per this many document sentences (long documents)
    pub sentences_per_summary_sentence: usize,
    /// Delimiter placed between selected sentences
    pub separator: String,
    /// Output ordering of selected sentences
    pub order: OutputOrder,
    /// Stopword language code
    pub language: String,
    /// Sentence count at which similarity rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
            default_top_n: 2,
            long_document_threshold: 10,
            sentences_per_summary_sentence: 5,
            separator: ". ".to_string(),
            order: OutputOrder::Rank,
            language: "en".to_string(),
            parallel_threshold: 64,
        }
    }
}

impl SummaryConfig {
    /// Parse a JSON configuration document and validate it.
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.tolerance > 0.0) {
            return Err(TextRankError::invalid_config("tolerance must be > 0"));
        }

        if self.sentences_per_summary_sentence == 0 {
            return Err(TextRankError::invalid_config(
                "sentences_per_summary_sentence must be > 0",
            ));
        }

        Ok(())
    }

    /// Number of sentences to select for a document of `sentence_count` sentences
    pub fn top_n(&self, sentence_count: usize) -> usize {
        let top_n = if sentence_count > self.long_document_threshold {
            sentence_count / self.sentences_per_summary_sentence.max(1)
        } else {
            self.default_top_n
        };
        top_n.min(sentence_count)
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: set the summary length for short documents
    pub fn with_default_top_n(mut self, top_n: usize) -> Self {
        self.default_top_n = top_n;
        self
    }

    /// Builder method: set the separator between selected sentences
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder method: set output order
    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set the parallel matrix threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
