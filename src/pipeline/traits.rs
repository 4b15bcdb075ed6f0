//! Stage trait definitions for the pipeline.
//!
//! The two collaborators the ranking core depends on are expressed as
//! traits so callers can plug in their own tokenizer or stopword source.
//! Implementations are statically dispatched by [`TextRankSummarizer`];
//! trait objects work as well.
//!
//! [`TextRankSummarizer`]: crate::pipeline::runner::TextRankSummarizer

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;
use rustc_hash::FxHashSet;
use std::collections::HashSet;

// ============================================================================
// SentenceSplitter: raw text to tokenized sentences (stage 0)
// ============================================================================

/// Turns raw text into an ordered sequence of tokenized sentences.
///
/// # Contract
///
/// - Sentence indices are `0..n` in document order.
/// - Tokens are lower-cased.
/// - Empty input yields an empty vector, never an error.
pub trait SentenceSplitter: Send + Sync {
    /// Split `text` into sentences.
    fn split(&self, text: &str) -> Vec<Sentence>;
}

impl SentenceSplitter for Tokenizer {
    #[inline]
    fn split(&self, text: &str) -> Vec<Sentence> {
        self.tokenize(text)
    }
}

impl<T: SentenceSplitter + ?Sized> SentenceSplitter for Box<T> {
    fn split(&self, text: &str) -> Vec<Sentence> {
        (**self).split(text)
    }
}

// ============================================================================
// StopwordProvider: tokens excluded from similarity counting
// ============================================================================

/// Answers whether a (lower-cased) token is a stopword.
pub trait StopwordProvider: Send + Sync {
    /// Check if `token` is a stopword.
    fn is_stopword(&self, token: &str) -> bool;
}

impl StopwordProvider for StopwordFilter {
    #[inline]
    fn is_stopword(&self, token: &str) -> bool {
        StopwordFilter::is_stopword(self, token)
    }
}

impl StopwordProvider for FxHashSet<String> {
    #[inline]
    fn is_stopword(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl StopwordProvider for HashSet<String> {
    #[inline]
    fn is_stopword(&self, token: &str) -> bool {
        self.contains(token)
    }
}

impl<T: StopwordProvider + ?Sized> StopwordProvider for &T {
    #[inline]
    fn is_stopword(&self, token: &str) -> bool {
        (**self).is_stopword(token)
    }
}

impl<T: StopwordProvider + ?Sized> StopwordProvider for Box<T> {
    fn is_stopword(&self, token: &str) -> bool {
        (**self).is_stopword(token)
    }
}

/// Stopword provider that excludes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopwords;

impl StopwordProvider for NoStopwords {
    #[inline]
    fn is_stopword(&self, _token: &str) -> bool {
        false
    }
}
