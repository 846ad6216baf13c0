//! Graph library used by the command line tools: `petgraph` holds the graph
//! and finds its components, `nalgebra` computes the spectrum, and the
//! neighbourhood counts (clustering, triads, CNM modularity) are done here.
use crate::backend::{AlgorithmError, Communities, GraphAlgorithms};
use crate::{Error, Result};
use graph_io::RawGraph;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
pub mod clustering;
pub mod community;
pub mod components;
pub mod spectrum;
pub mod triads;

/// An undirected simple graph keyed by the dataset's node ids.
///
/// Declaring an id twice or naming an undeclared id in an edge is an error.
/// A repeated edge, in either orientation, is ignored. Self-loops are kept.
#[derive(Debug, Clone)]
pub struct SimpleGraph {
    graph: UnGraph<i64, ()>,
    index: HashMap<i64, NodeIndex>,
}

impl SimpleGraph {
    pub fn new(raw: &RawGraph) -> Result<Self> {
        let mut graph = UnGraph::with_capacity(raw.nodes.len(), raw.edges.len());
        let mut index = HashMap::with_capacity(raw.nodes.len());
        for &id in raw.nodes.iter() {
            match index.entry(id) {
                Entry::Occupied(_) => return Err(Error::DuplicateNode { id }),
                Entry::Vacant(entry) => {
                    entry.insert(graph.add_node(id));
                }
            }
        }
        for &(from, to) in raw.edges.iter() {
            let lookup = |id: i64| {
                index
                    .get(&id)
                    .copied()
                    .ok_or(Error::InvalidEdgeEndpoint { from, to, missing: id })
            };
            let (a, b) = (lookup(from)?, lookup(to)?);
            if graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, ());
            }
        }
        Ok(Self { graph, index })
    }
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
    pub fn contains_node(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }
    pub fn has_edge(&self, a: i64, b: i64) -> bool {
        match (self.index.get(&a), self.index.get(&b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }
    pub fn inner(&self) -> &UnGraph<i64, ()> {
        &self.graph
    }
    /// Node ids, indexed like [SimpleGraph::neighbors].
    pub fn ids(&self) -> Vec<i64> {
        self.graph.node_indices().map(|n| self.graph[n]).collect()
    }
    /// Sorted neighbour lists by node index, self-loops removed.
    pub fn neighbors(&self) -> Vec<Vec<usize>> {
        self.graph
            .node_indices()
            .map(|n| {
                let mut nbrs: Vec<_> = self
                    .graph
                    .neighbors(n)
                    .filter(|&m| m != n)
                    .map(|m| m.index())
                    .collect();
                nbrs.sort_unstable();
                nbrs.dedup();
                nbrs
            })
            .collect()
    }
    /// Node indices in ascending id order.
    pub fn ordered_by_id(&self) -> Vec<usize> {
        let mut order: Vec<_> = self.graph.node_indices().collect();
        order.sort_by_key(|&n| self.graph[n]);
        order.into_iter().map(|n| n.index()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl GraphAlgorithms for NativeBackend {
    type Graph = SimpleGraph;
    fn build_graph(&self, raw: &RawGraph) -> Result<SimpleGraph> {
        let graph = SimpleGraph::new(raw)?;
        debug!(
            "built graph: {} nodes, {} distinct edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
    fn clustering_coefficient(&self, graph: &SimpleGraph) -> std::result::Result<f64, AlgorithmError> {
        clustering::average_clustering(&graph.neighbors())
    }
    fn communities(&self, graph: &SimpleGraph) -> std::result::Result<Communities, AlgorithmError> {
        community::greedy_modularity(&graph.neighbors(), &graph.ids())
    }
    fn scc_size_distribution(
        &self,
        graph: &SimpleGraph,
    ) -> std::result::Result<Vec<(usize, usize)>, AlgorithmError> {
        Ok(components::size_distribution(graph.inner()))
    }
    fn top_eigenvalues(&self, graph: &SimpleGraph, k: usize) -> std::result::Result<Vec<f64>, AlgorithmError> {
        spectrum::top_eigenvalues(spectrum::adjacency_matrix(graph.inner())?, k)
    }
    fn triad_count(&self, graph: &SimpleGraph, sample: usize) -> std::result::Result<u64, AlgorithmError> {
        let neighbors = graph.neighbors();
        let order = graph.ordered_by_id();
        Ok(triads::triad_count(&neighbors, &order, sample))
    }
}
