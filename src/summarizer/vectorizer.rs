//! Pairwise sentence vectorization
//!
//! Two sentences are compared over their combined vocabulary: each becomes
//! a token-count vector with one slot per distinct token, and the score is
//! the cosine similarity of the two vectors.

use crate::pipeline::traits::StopwordProvider;
use crate::types::Sentence;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Lower-case a token, borrowing when it has no upper-case characters
fn normalize(token: &str) -> Cow<'_, str> {
    if token.chars().any(char::is_uppercase) {
        Cow::Owned(token.to_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}

/// Token → slot mapping for a single pairwise comparison
///
/// Tokens are compared case-insensitively and slots are assigned in
/// first-seen order across both sentences. Stopwords occupy slots too; they
/// just never increment them.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary<'a> {
    slots: FxHashMap<Cow<'a, str>, usize>,
}

impl<'a> Vocabulary<'a> {
    /// Build the union vocabulary of two sentences
    pub fn from_pair(a: &'a Sentence, b: &'a Sentence) -> Self {
        let mut slots =
            FxHashMap::with_capacity_and_hasher(a.len() + b.len(), Default::default());
        for token in a.tokens.iter().chain(b.tokens.iter()) {
            let next = slots.len();
            slots.entry(normalize(token)).or_insert(next);
        }
        Self { slots }
    }

    /// Slot index for a token
    pub fn slot(&self, token: &str) -> Option<usize> {
        self.slots.get(&*normalize(token)).copied()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Count non-stopword tokens of `sentence` into a vector over this vocabulary
    pub fn frequency_vector<S>(&self, sentence: &Sentence, stopwords: &S) -> Vec<f64>
    where
        S: StopwordProvider + ?Sized,
    {
        let mut vector = vec![0.0; self.len()];
        if self.is_empty() {
            return vector;
        }
        for token in &sentence.tokens {
            let token = normalize(token);
            if stopwords.is_stopword(&token) {
                continue;
            }
            if let Some(slot) = self.slots.get(&*token) {
                vector[*slot] += 1.0;
            }
        }
        vector
    }
}

/// Compute cosine similarity between two equal-length vectors
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> f64 {
    debug_assert_eq!(u.len(), v.len());

    let (dot, uu, vv) = u
        .iter()
        .zip(v.iter())
        .fold((0.0, 0.0, 0.0), |(dot, uu, vv), (&x, &y)| {
            (dot + x * y, uu + x * x, vv + y * y)
        });

    if uu == 0.0 || vv == 0.0 {
        return 0.0;
    }

    let distance = 1.0 - dot / (uu.sqrt() * vv.sqrt());
    1.0 - distance
}

/// Scores the lexical similarity of sentence pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceVectorizer;

impl SentenceVectorizer {
    /// Create a new vectorizer
    pub fn new() -> Self {
        Self
    }

    /// Build equal-length frequency vectors for a sentence pair
    pub fn frequency_vectors<S>(
        &self,
        a: &Sentence,
        b: &Sentence,
        stopwords: &S,
    ) -> (Vec<f64>, Vec<f64>)
    where
        S: StopwordProvider + ?Sized,
    {
        let vocabulary = Vocabulary::from_pair(a, b);
        (
            vocabulary.frequency_vector(a, stopwords),
            vocabulary.frequency_vector(b, stopwords),
        )
    }

    /// Similarity of two sentences in [0, 1]
    pub fn similarity<S>(&self, a: &Sentence, b: &Sentence, stopwords: &S) -> f64
    where
        S: StopwordProvider + ?Sized,
    {
        let (u, v) = self.frequency_vectors(a, b, stopwords);
        cosine_similarity(&u, &v)
    }
}
