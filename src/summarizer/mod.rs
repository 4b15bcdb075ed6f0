//! Summarization components
//!
//! Provides TextRank extractive summarization: pairwise sentence vectors,
//! the similarity matrix, PageRank centrality and top-n selection.

pub mod matrix;
pub mod ranker;
pub mod selector;
pub mod vectorizer;
