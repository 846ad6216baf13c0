//! The capabilities a graph library has to offer for the metrics.
use crate::Result;
use graph_io::RawGraph;

/// Failures raised by a graph library while computing a metric.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("graph has no edges")]
    NoEdges,
    #[error("zero eigenvalues requested")]
    NoEigenvaluesRequested,
    #[error("no eigenvalue was produced")]
    NoEigenvalues,
    #[error("{nodes} nodes exceed the dense matrix limit of {limit}")]
    TooLarge { nodes: usize, limit: usize },
}

/// A partition of the nodes together with its modularity.
#[derive(Debug, Clone, PartialEq)]
pub struct Communities {
    pub modularity: f64,
    /// Node ids of each community, sorted.
    pub members: Vec<Vec<i64>>,
}

/// One method per capability. The graph type belongs to the implementation,
/// and so do its rules for duplicated nodes, repeated edges and unknown
/// endpoints.
pub trait GraphAlgorithms {
    type Graph;
    fn build_graph(&self, raw: &RawGraph) -> Result<Self::Graph>;
    fn clustering_coefficient(&self, graph: &Self::Graph) -> std::result::Result<f64, AlgorithmError>;
    fn communities(&self, graph: &Self::Graph) -> std::result::Result<Communities, AlgorithmError>;
    /// (component size, number of components of that size), by size.
    fn scc_size_distribution(
        &self,
        graph: &Self::Graph,
    ) -> std::result::Result<Vec<(usize, usize)>, AlgorithmError>;
    /// The `k` largest eigenvalues, in descending order. Implementations may
    /// refuse graphs too large for them with [AlgorithmError::TooLarge].
    fn top_eigenvalues(&self, graph: &Self::Graph, k: usize) -> std::result::Result<Vec<f64>, AlgorithmError>;
    /// Closed triads among the first `sample` nodes, each triangle counted once
    /// when every node is sampled.
    fn triad_count(&self, graph: &Self::Graph, sample: usize) -> std::result::Result<u64, AlgorithmError>;
}
