//! Graph builder for sentence-similarity graphs
//!
//! Nodes are sentence positions `0..n`; the adjacency of each node is an
//! FxHashMap so edges can be written in any order during construction.

use crate::summarizer::matrix::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable undirected graph builder
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create a builder with `count` isolated nodes
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); count],
        }
    }

    /// Set the weight of the undirected edge between two nodes
    ///
    /// Self-loops and non-positive weights are ignored; a later write to the
    /// same pair replaces the earlier weight.
    pub fn set_edge(&mut self, a: u32, b: u32, weight: f64) {
        if a == b || !(weight > 0.0) {
            return;
        }

        if let Some(node) = self.nodes.get_mut(a as usize) {
            node.edges.insert(b, weight);
        }
        if let Some(node) = self.nodes.get_mut(b as usize) {
            node.edges.insert(a, weight);
        }
    }

    /// Build the sentence graph from a similarity matrix
    ///
    /// Every non-zero off-diagonal entry becomes an edge. Entries are visited
    /// row by row, so for an asymmetric matrix the lower-triangle value wins.
    pub fn from_similarity_matrix(matrix: &SimilarityMatrix) -> Self {
        let mut builder = Self::with_nodes(matrix.len());

        for (i, row) in matrix.rows().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                builder.set_edge(i as u32, j as u32, weight);
            }
        }

        builder
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges (counting each undirected edge once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }
}
