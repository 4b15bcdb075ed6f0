//! Sentence centrality ranking
//!
//! Turns a similarity matrix into a weighted sentence graph and scores each
//! sentence with PageRank. Graphs without edges and runs that fail to
//! converge both fall back to uniform scores.

use super::matrix::SimilarityMatrix;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::SummaryConfig;
use tracing::{debug, warn};

/// PageRank-based sentence ranker
#[derive(Debug, Clone, Default)]
pub struct CentralityRanker {
    pagerank: StandardPageRank,
}

impl CentralityRanker {
    /// Create a ranker with default PageRank settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ranker from the PageRank fields of a config
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            pagerank: StandardPageRank::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_tolerance(config.tolerance),
        }
    }

    /// Score every sentence of the matrix
    pub fn rank(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        let n = matrix.len();
        if n == 0 {
            return PageRankResult::uniform(0);
        }

        let builder = GraphBuilder::from_similarity_matrix(matrix);
        if builder.edge_count() == 0 {
            debug!(sentences = n, "similarity graph has no edges, using uniform scores");
            return PageRankResult::uniform(n);
        }

        let graph = CsrGraph::from_builder(&builder);
        debug!(
            sentences = n,
            edges = graph.num_edges() / 2,
            "built similarity graph"
        );

        let result = self.pagerank.run(&graph);
        if !result.converged {
            warn!(
                iterations = result.iterations,
                delta = result.delta,
                "pagerank did not converge, using uniform scores"
            );
            let mut fallback = PageRankResult::uniform(n);
            fallback.iterations = result.iterations;
            fallback.delta = result.delta;
            fallback.converged = false;
            return fallback;
        }

        debug!(iterations = result.iterations, delta = result.delta, "pagerank converged");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_matrix() {
        let result = CentralityRanker::new().rank(&SimilarityMatrix::zeros(0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_sentence_is_uniform() {
        let result = CentralityRanker::new().rank(&SimilarityMatrix::zeros(1));

        assert_eq!(result.scores, vec![1.0]);
        assert!(result.converged);
    }

    #[test]
    fn test_all_zero_similarity_is_uniform() {
        let result = CentralityRanker::new().rank(&SimilarityMatrix::zeros(4));

        assert_eq!(result.scores, vec![0.25; 4]);
    }

    #[test]
    fn test_connected_pair_outranks_isolated() {
        let result = CentralityRanker::new().rank(&matrix(vec![
            vec![0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ]));

        assert!(result.converged);
        assert!(result.scores[0] > result.scores[2]);
        assert!((result.scores[0] - result.scores[1]).abs() < 1e-12);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_central_sentence_ranks_first() {
        let result = CentralityRanker::new().rank(&matrix(vec![
            vec![0.0, 0.6, 0.6, 0.6],
            vec![0.6, 0.0, 0.1, 0.0],
            vec![0.6, 0.1, 0.0, 0.0],
            vec![0.6, 0.0, 0.0, 0.0],
        ]));

        assert_eq!(result.ranked()[0], 0);
    }

    #[test]
    fn test_non_convergence_falls_back_to_uniform() {
        let config = SummaryConfig::default()
            .with_max_iterations(1)
            .with_tolerance(1e-300);
        let result = CentralityRanker::from_config(&config).rank(&matrix(vec![
            vec![0.0, 0.9, 0.1],
            vec![0.9, 0.0, 0.0],
            vec![0.1, 0.0, 0.0],
        ]));

        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-12);
        }
    }
}
