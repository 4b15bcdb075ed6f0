//! Summarization pipeline.
//!
//! ## Submodules
//!
//! - [`traits`]: Collaborator seams (sentence splitting, stopwords)
//! - [`runner`]: Stage orchestration

pub mod runner;
pub mod traits;

pub use runner::TextRankSummarizer;
pub use traits::{NoStopwords, SentenceSplitter, StopwordProvider};
