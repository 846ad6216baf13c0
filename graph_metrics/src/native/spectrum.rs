use crate::backend::AlgorithmError;
use na::DMatrix;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Largest graph given a dense adjacency matrix: 8192 nodes take 512 MiB of
/// `f64` and a cubic eigen decomposition.
pub const MAX_DENSE_NODES: usize = 8192;

/// Symmetric 0/1 adjacency matrix indexed by node index. A self-loop puts a
/// 1 on the diagonal. Fails before allocating when the graph has more than
/// [MAX_DENSE_NODES] nodes.
pub fn adjacency_matrix<N, E>(graph: &UnGraph<N, E>) -> Result<DMatrix<f64>, AlgorithmError> {
    let n = graph.node_count();
    if n > MAX_DENSE_NODES {
        return Err(AlgorithmError::TooLarge {
            nodes: n,
            limit: MAX_DENSE_NODES,
        });
    }
    let mut matrix = DMatrix::zeros(n, n);
    for edge in graph.edge_references() {
        let (a, b) = (edge.source().index(), edge.target().index());
        matrix[(a, b)] = 1.;
        matrix[(b, a)] = 1.;
    }
    Ok(matrix)
}

/// The `k` largest eigenvalues in descending order (fewer if the matrix is
/// smaller than `k`).
pub fn top_eigenvalues(matrix: DMatrix<f64>, k: usize) -> Result<Vec<f64>, AlgorithmError> {
    if k == 0 {
        return Err(AlgorithmError::NoEigenvaluesRequested);
    }
    if matrix.nrows() == 0 {
        return Err(AlgorithmError::EmptyGraph);
    }
    let eigens = matrix.symmetric_eigen();
    let mut values: Vec<f64> = eigens.eigenvalues.iter().copied().collect();
    values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    values.truncate(k);
    Ok(values)
}
