//! PageRank algorithms
//!
//! This module provides the weighted power-iteration PageRank used to score
//! sentence centrality.

pub mod standard;

use std::cmp::Ordering;

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Uniform scores `1/n` over `n` nodes
    pub fn uniform(n: usize) -> Self {
        let scores = if n == 0 {
            Vec::new()
        } else {
            vec![1.0 / n as f64; n]
        };
        Self::new(scores, 0, 0.0, true)
    }

    /// Node IDs ordered by descending score; ties keep ascending node order
    pub fn ranked(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| compare_desc(self.scores[a], self.scores[b]));
        order
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|i| (i as u32, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Number of scored nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no nodes were scored
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// Stable sorts keep index order among equal scores.
fn compare_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
