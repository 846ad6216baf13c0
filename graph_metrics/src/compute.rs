//! Dispatch from a [Metric] to the backend, plus the local arithmetic some
//! metrics need on top of it.
use crate::backend::{AlgorithmError, GraphAlgorithms};
use crate::{Error, Metric, Result};
use graph_io::RawGraph;

/// Eigenvalues requested from the backend. [select_eigenvalue] keeps the
/// last of them, which is the largest only while this stays 1.
pub const EIGENVALUE_COUNT: usize = 1;

/// `graph` is the backend's build of `raw`. Density is counted on `raw`
/// alone and never reaches the backend.
pub fn compute<B: GraphAlgorithms>(
    backend: &B,
    metric: Metric,
    graph: &B::Graph,
    raw: &RawGraph,
) -> Result<f64> {
    let node_count = raw.node_count();
    let failed = |source: AlgorithmError| Error::ComputationFailed { metric, source };
    match metric {
        Metric::Clustering => backend.clustering_coefficient(graph).map_err(failed),
        Metric::Community => {
            let communities = backend.communities(graph).map_err(failed)?;
            debug!("{} communities", communities.members.len());
            Ok(communities.modularity)
        }
        Metric::Connectedness => {
            let distribution = backend.scc_size_distribution(graph).map_err(failed)?;
            debug!("component sizes:{:?}", distribution);
            connectedness(&distribution, node_count)
        }
        Metric::Density => density(raw.edge_count(), node_count),
        Metric::Eigenvalue => {
            let values = backend
                .top_eigenvalues(graph, EIGENVALUE_COUNT)
                .map_err(failed)?;
            select_eigenvalue(&values).ok_or_else(|| failed(AlgorithmError::NoEigenvalues))
        }
        Metric::Triads => backend
            .triad_count(graph, node_count)
            .map(|count| count as f64)
            .map_err(failed),
    }
}

/// Number of components (the counts summed over every size) divided by the
/// squared node count.
///
/// This is not the fraction of connected node pairs: a graph whose nodes are
/// all in one component scores `1/n^2`, and a graph without edges `1/n`.
/// The formula is kept as is so results stay comparable with earlier runs.
pub fn connectedness(distribution: &[(usize, usize)], node_count: usize) -> Result<f64> {
    let total: usize = distribution.iter().map(|&(_, count)| count).sum();
    over_squared(Metric::Connectedness, total, node_count)
}

/// Edge lines divided by the squared node count. Every line of the edges
/// file counts, repeated ones included.
pub fn density(edge_count: usize, node_count: usize) -> Result<f64> {
    over_squared(Metric::Density, edge_count, node_count)
}

fn over_squared(metric: Metric, numerator: usize, node_count: usize) -> Result<f64> {
    if node_count == 0 {
        return Err(Error::DivisionByZero { metric });
    }
    // Square as an integer, then convert once.
    let squared = (node_count as u128 * node_count as u128) as f64;
    Ok(numerator as f64 / squared)
}

/// The last value of the sequence.
pub fn select_eigenvalue(values: &[f64]) -> Option<f64> {
    values.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Communities;
    use graph_io::format_value;
    use std::cell::RefCell;

    /// Canned answers, recording the arguments it was called with.
    #[derive(Default)]
    struct FakeBackend {
        distribution: Vec<(usize, usize)>,
        eigenvalues: Vec<f64>,
        fail: Option<AlgorithmError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn answer<T>(&self, call: String, value: T) -> std::result::Result<T, AlgorithmError> {
            self.calls.borrow_mut().push(call);
            match &self.fail {
                Some(e) => Err(e.clone()),
                None => Ok(value),
            }
        }
    }

    impl GraphAlgorithms for FakeBackend {
        type Graph = RawGraph;
        fn build_graph(&self, raw: &RawGraph) -> Result<RawGraph> {
            Ok(raw.clone())
        }
        fn clustering_coefficient(&self, _: &RawGraph) -> std::result::Result<f64, AlgorithmError> {
            self.answer("clustering".to_string(), 0.25)
        }
        fn communities(&self, _: &RawGraph) -> std::result::Result<Communities, AlgorithmError> {
            let communities = Communities {
                modularity: 0.375,
                members: vec![vec![1, 2], vec![3]],
            };
            self.answer("communities".to_string(), communities)
        }
        fn scc_size_distribution(
            &self,
            _: &RawGraph,
        ) -> std::result::Result<Vec<(usize, usize)>, AlgorithmError> {
            self.answer("scc".to_string(), self.distribution.clone())
        }
        fn top_eigenvalues(&self, _: &RawGraph, k: usize) -> std::result::Result<Vec<f64>, AlgorithmError> {
            self.answer(format!("eigen {}", k), self.eigenvalues.clone())
        }
        fn triad_count(&self, _: &RawGraph, sample: usize) -> std::result::Result<u64, AlgorithmError> {
            self.answer(format!("triads {}", sample), 7)
        }
    }

    fn graph(n: i64) -> RawGraph {
        RawGraph::new((1..=n).collect(), vec![])
    }

    #[test]
    fn connectedness_single_component() {
        let value = connectedness(&[(4, 1)], 4).unwrap();
        assert_eq!(value, 0.0625);
        assert_eq!(format_value(value), "0.0625000000");
    }
    #[test]
    fn connectedness_counts_components_not_pairs() {
        // Five isolated nodes: five components of size one.
        let value = connectedness(&[(1, 5)], 5).unwrap();
        assert_eq!(value, 0.2);
        // Sizes are ignored, only the counts are summed.
        let value = connectedness(&[(1, 2), (3, 1), (10, 1)], 15).unwrap();
        assert_eq!(value, 4.0 / 225.0);
    }
    #[test]
    fn connectedness_without_nodes() {
        match connectedness(&[], 0) {
            Err(Error::DivisionByZero { metric: Metric::Connectedness }) => {}
            x => panic!("{:?}", x),
        }
        let backend = FakeBackend::default();
        match compute(&backend, Metric::Connectedness, &graph(0), &graph(0)) {
            Err(Error::DivisionByZero { metric: Metric::Connectedness }) => {}
            x => panic!("{:?}", x),
        }
    }
    #[test]
    fn connectedness_dispatch() {
        let backend = FakeBackend {
            distribution: vec![(4, 1)],
            ..FakeBackend::default()
        };
        let value = compute(&backend, Metric::Connectedness, &graph(4), &graph(4)).unwrap();
        assert_eq!(format_value(value), "0.0625000000");
    }
    #[test]
    fn eigenvalue_requests_one() {
        let backend = FakeBackend {
            eigenvalues: vec![2.3456789012],
            ..FakeBackend::default()
        };
        let value = compute(&backend, Metric::Eigenvalue, &graph(3), &graph(3)).unwrap();
        assert_eq!(format_value(value), "2.3456789012");
        assert_eq!(backend.calls.borrow().as_slice(), &["eigen 1".to_string()]);
    }
    #[test]
    fn eigenvalue_selection_keeps_last() {
        assert_eq!(select_eigenvalue(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(select_eigenvalue(&[]), None);
        let backend = FakeBackend::default();
        match compute(&backend, Metric::Eigenvalue, &graph(3), &graph(3)) {
            Err(Error::ComputationFailed { metric, source }) => {
                assert_eq!(metric, Metric::Eigenvalue);
                assert_eq!(source, AlgorithmError::NoEigenvalues);
            }
            x => panic!("{:?}", x),
        }
    }
    #[test]
    fn triads_sample_every_node() {
        let backend = FakeBackend::default();
        let value = compute(&backend, Metric::Triads, &graph(6), &graph(6)).unwrap();
        assert_eq!(value, 7.0);
        assert_eq!(backend.calls.borrow().as_slice(), &["triads 6".to_string()]);
    }
    #[test]
    fn raw_scalars() {
        let backend = FakeBackend::default();
        let value = compute(&backend, Metric::Clustering, &graph(3), &graph(3)).unwrap();
        assert_eq!(value, 0.25);
        let value = compute(&backend, Metric::Community, &graph(3), &graph(3)).unwrap();
        assert_eq!(value, 0.375);
    }
    #[test]
    fn failures_propagate() {
        let backend = FakeBackend {
            fail: Some(AlgorithmError::EmptyGraph),
            ..FakeBackend::default()
        };
        let backed: Vec<_> = Metric::ALL
            .iter()
            .copied()
            .filter(|&m| m != Metric::Density)
            .collect();
        for &metric in backed.iter() {
            match compute(&backend, metric, &graph(2), &graph(2)) {
                Err(Error::ComputationFailed { metric: m, source }) => {
                    assert_eq!(m, metric);
                    assert_eq!(source, AlgorithmError::EmptyGraph);
                }
                x => panic!("{}: {:?}", metric, x),
            }
        }
        assert_eq!(backend.calls.borrow().len(), backed.len());
    }
    #[test]
    fn density_of_edge_lines() {
        assert_eq!(density(6, 6).unwrap(), 6.0 / 36.0);
        assert_eq!(format_value(density(6, 6).unwrap()), "0.1666666667");
        assert_eq!(density(0, 3).unwrap(), 0.0);
        match density(1, 0) {
            Err(e @ Error::DivisionByZero { metric: Metric::Density }) => assert_eq!(e.exit_code(), 4),
            x => panic!("{:?}", x),
        }
    }
    #[test]
    fn density_skips_the_backend() {
        let backend = FakeBackend {
            fail: Some(AlgorithmError::EmptyGraph),
            ..FakeBackend::default()
        };
        let raw = RawGraph::new(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (2, 3)]);
        let value = compute(&backend, Metric::Density, &raw, &raw).unwrap();
        assert_eq!(value, 3.0 / 16.0);
        assert!(backend.calls.borrow().is_empty());
    }
}
