//! Summary sentence selection
//!
//! Picks the highest-scoring sentences and joins their surface text.
//! The number picked grows with document length; ties in score keep
//! document order so the output is deterministic.

use crate::pagerank::PageRankResult;
use crate::types::{OutputOrder, Sentence, SummaryConfig};
use serde::Serialize;
use std::fmt;

/// A selected sentence with its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    /// Position in the source document
    pub index: usize,
    /// Original surface text
    pub text: String,
    /// Centrality score
    pub score: f64,
}

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences in output order
    pub sentences: Vec<SelectedSentence>,
    /// The assembled summary string
    pub text: String,
}

impl Summary {
    /// The assembled summary string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the summary, returning the assembled string
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Summary> for String {
    fn from(summary: Summary) -> Self {
        summary.text
    }
}

/// Top-n sentence selector
#[derive(Debug, Clone, Default)]
pub struct SummarySelector {
    config: SummaryConfig,
}

impl SummarySelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// Set output order
    pub fn with_order(mut self, order: OutputOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Number of sentences selected for a document of `sentence_count` sentences
    pub fn top_n(&self, sentence_count: usize) -> usize {
        self.config.top_n(sentence_count)
    }

    /// Select and assemble the summary
    ///
    /// `ranking` must hold one score per sentence. Documents with zero or one
    /// sentence are returned unchanged.
    pub fn select(&self, sentences: &[Sentence], ranking: &PageRankResult) -> Summary {
        match sentences {
            [] => return Summary::default(),
            [only] => {
                return Summary {
                    sentences: vec![SelectedSentence {
                        index: only.index,
                        text: only.text.clone(),
                        score: ranking.score(0),
                    }],
                    text: only.text.clone(),
                }
            }
            _ => {}
        }

        debug_assert_eq!(sentences.len(), ranking.len());

        let top_n = self.top_n(sentences.len());
        let mut picked = ranking.top_n(top_n);

        if self.config.order == OutputOrder::Document {
            picked.sort_unstable_by_key(|&(node, _)| node);
        }

        let selected: Vec<SelectedSentence> = picked
            .into_iter()
            .filter_map(|(node, score)| {
                let sentence = sentences.get(node as usize)?;
                Some(SelectedSentence {
                    index: sentence.index,
                    text: sentence.text.clone(),
                    score,
                })
            })
            .collect();

        let text = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.config.separator);

        Summary {
            sentences: selected,
            text,
        }
    }
}
