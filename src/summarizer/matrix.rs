//! All-pairs sentence similarity matrix
//!
//! Every ordered pair of distinct sentences is scored with the
//! [`SentenceVectorizer`]; the diagonal stays zero. Rows are independent,
//! so large documents compute them on the rayon pool.

use super::vectorizer::SentenceVectorizer;
use crate::pipeline::traits::StopwordProvider;
use crate::types::Sentence;
use rayon::prelude::*;

/// Default sentence count at which rows are computed in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// A dense square similarity matrix indexed by sentence position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    /// Number of sentences (rows and columns)
    size: usize,
    /// Row-major values, `size * size` entries
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix for `size` sentences
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    /// Create a matrix from row-major values
    ///
    /// Returns `None` when `values` is not square or the diagonal is non-zero.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        if (0..size).any(|i| rows[i][i] != 0.0) {
            return None;
        }
        Some(Self {
            size,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no sentences
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity of sentence `i` to sentence `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.size).map(move |i| self.row(i))
    }

    /// Check if any off-diagonal entry is non-zero
    pub fn has_edges(&self) -> bool {
        self.values.iter().any(|&v| v != 0.0)
    }

    fn set(&mut self, i: usize, j: usize, value: f64) {
        self.values[i * self.size + j] = value;
    }
}

/// Builds the similarity matrix for a sentence sequence
#[derive(Debug, Clone)]
pub struct SimilarityMatrixBuilder {
    vectorizer: SentenceVectorizer,
    parallel_threshold: usize,
}

impl Default for SimilarityMatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityMatrixBuilder {
    /// Create a new builder with the default parallel threshold
    pub fn new() -> Self {
        Self {
            vectorizer: SentenceVectorizer::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the sentence count at which rows are computed in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the matrix, choosing sequential or parallel by sentence count
    pub fn build<S>(&self, sentences: &[Sentence], stopwords: &S) -> SimilarityMatrix
    where
        S: StopwordProvider + ?Sized,
    {
        if sentences.len() >= self.parallel_threshold {
            self.build_parallel(sentences, stopwords)
        } else {
            self.build_sequential(sentences, stopwords)
        }
    }

    /// Build the matrix on the current thread
    pub fn build_sequential<S>(&self, sentences: &[Sentence], stopwords: &S) -> SimilarityMatrix
    where
        S: StopwordProvider + ?Sized,
    {
        let n = sentences.len();
        let mut matrix = SimilarityMatrix::zeros(n);

        for (i, a) in sentences.iter().enumerate() {
            for (j, b) in sentences.iter().enumerate() {
                if i == j {
                    continue;
                }
                matrix.set(i, j, self.vectorizer.similarity(a, b, stopwords));
            }
        }

        matrix
    }

    /// Build the matrix with rows computed in parallel
    pub fn build_parallel<S>(&self, sentences: &[Sentence], stopwords: &S) -> SimilarityMatrix
    where
        S: StopwordProvider + ?Sized,
    {
        let n = sentences.len();
        let mut values = vec![0.0; n * n];

        if n > 0 {
            values
                .par_chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| {
                    let a = &sentences[i];
                    for (j, b) in sentences.iter().enumerate() {
                        if i != j {
                            row[j] = self.vectorizer.similarity(a, b, stopwords);
                        }
                    }
                });
        }

        SimilarityMatrix { size: n, values }
    }
}
