//! # sentence_rank
//!
//! Extractive summarization with TextRank.
//!
//! Sentences are compared pairwise by the cosine similarity of their
//! token-count vectors, the resulting similarity matrix is treated as a
//! weighted graph, and PageRank centrality decides which sentences make up
//! the summary.
//!
//! ```rust,ignore
//! use sentence_rank::TextRankSummarizer;
//!
//! let summary = TextRankSummarizer::new().summarize(text);
//! println!("{summary}");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{OutputOrder, Sentence, SummaryConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::runner::{summarize, TextRankSummarizer};
pub use pipeline::traits::{NoStopwords, SentenceSplitter, StopwordProvider};
pub use summarizer::matrix::{SimilarityMatrix, SimilarityMatrixBuilder};
pub use summarizer::ranker::CentralityRanker;
pub use summarizer::selector::{SelectedSentence, Summary, SummarySelector};
pub use summarizer::vectorizer::{cosine_similarity, SentenceVectorizer, Vocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
