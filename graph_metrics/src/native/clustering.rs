use super::triads::closed_triads;
use crate::backend::AlgorithmError;

/// `2·t / (d·(d−1))` where `t` is the number of edges among the `d`
/// neighbours of `node`; 0 for nodes of degree below two.
pub fn local_clustering(neighbors: &[Vec<usize>], node: usize) -> f64 {
    let degree = neighbors[node].len();
    if degree < 2 {
        return 0.0;
    }
    let closed = closed_triads(neighbors, node) as f64;
    2.0 * closed / (degree * (degree - 1)) as f64
}

/// Mean local clustering over every node.
pub fn average_clustering(neighbors: &[Vec<usize>]) -> Result<f64, AlgorithmError> {
    if neighbors.is_empty() {
        return Err(AlgorithmError::EmptyGraph);
    }
    let total: f64 = (0..neighbors.len())
        .map(|node| local_clustering(neighbors, node))
        .sum();
    Ok(total / neighbors.len() as f64)
}
