//! Read-only sentence graph in Compressed Sparse Row layout
//!
//! Power iteration walks every node's neighbors once per round, so the
//! adjacency lists are flattened into three parallel arrays.

use super::builder::GraphBuilder;

/// Frozen sentence graph
///
/// The neighbors of sentence `i` live at `row_ptr[i]..row_ptr[i + 1]` in
/// `col_idx` and `weights`, sorted by neighbor index.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of sentences
    pub num_nodes: usize,
    /// Offsets into `col_idx`/`weights`, one more entry than nodes
    pub row_ptr: Vec<usize>,
    /// Neighbor sentence of each stored edge
    pub col_idx: Vec<u32>,
    /// Similarity weight of each stored edge
    pub weights: Vec<f64>,
    /// Sum of edge weights per sentence
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a builder
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let mut graph = Self {
            num_nodes: builder.node_count(),
            total_weight: Vec::with_capacity(builder.node_count()),
            ..Self::default()
        };

        for (_, node) in builder.nodes() {
            let mut edges: Vec<(u32, f64)> = node.edges.iter().map(|(&t, &w)| (t, w)).collect();
            // Fixed order keeps the weight sums reproducible.
            edges.sort_unstable_by_key(|&(target, _)| target);

            let start = graph.weights.len();
            for (target, weight) in edges {
                graph.col_idx.push(target);
                graph.weights.push(weight);
            }
            graph
                .total_weight
                .push(graph.weights[start..].iter().sum::<f64>());
            graph.row_ptr.push(graph.col_idx.len());
        }

        graph
    }

    /// Neighbors of `node` with their edge weights
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let range = self.row_ptr[node as usize]..self.row_ptr[node as usize + 1];
        self.col_idx[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// Summed edge weight of `node`
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Whether the graph has no sentences
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Stored directed edges; each similarity edge is stored twice
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Sentences with no positive similarity to any other
    pub fn dangling_nodes(&self) -> Vec<u32> {
        self.total_weight
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w <= 0.0)
            .map(|(i, _)| i as u32)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> GraphBuilder {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.set_edge(0, 1, 1.0);
        builder.set_edge(1, 2, 2.0);
        builder.set_edge(0, 2, 1.5);
        builder
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 6);
        assert_eq!(csr.row_ptr, vec![0, 2, 4, 6]);
    }

    #[test]
    fn test_neighbor_iteration_is_sorted() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].0, 1);
        assert!((neighbors[0].1 - 1.0).abs() < 1e-10);
        assert_eq!(neighbors[1].0, 2);
    }

    #[test]
    fn test_node_total_weight() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_builder(&GraphBuilder::default());

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
    }

    #[test]
    fn test_dangling_nodes() {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.set_edge(0, 1, 1.0);

        let csr = CsrGraph::from_builder(&builder);
        assert_eq!(csr.dangling_nodes(), vec![2]);
    }
}
