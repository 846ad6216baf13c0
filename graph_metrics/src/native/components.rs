use petgraph::algo::tarjan_scc;
use petgraph::graph::UnGraph;
use std::collections::BTreeMap;

/// (component size, number of components of that size), ascending by size.
/// On an undirected graph the strongly connected components are the
/// connected components.
pub fn size_distribution<N, E>(graph: &UnGraph<N, E>) -> Vec<(usize, usize)> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for component in tarjan_scc(graph) {
        *counts.entry(component.len()).or_default() += 1;
    }
    counts.into_iter().collect()
}
