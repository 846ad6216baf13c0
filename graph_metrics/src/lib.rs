//! Scalar metrics of a graph dataset.
//!
//! A dataset `<id>` is the pair `vertices_<id>.txt`/`edges_<id>.txt`; each
//! metric is written to `<metric>_<id>.txt` as a fixed-point number.
//! The graph algorithms sit behind [GraphAlgorithms]; [NativeBackend] is the
//! implementation used by the binaries.
#[macro_use]
extern crate log;
#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate graph_io;
extern crate nalgebra as na;
extern crate petgraph;
#[cfg(test)]
extern crate tempfile;
extern crate thiserror;
pub mod backend;
pub mod cli;
pub mod compute;
pub mod error;
pub mod metric;
pub mod native;
pub use backend::{AlgorithmError, Communities, GraphAlgorithms};
pub use compute::{compute, connectedness, density, select_eigenvalue};
pub use error::Error;
pub use metric::Metric;
pub use native::NativeBackend;
use std::path::Path;

pub type Result<T> = std::result::Result<T, Error>;

/// Load dataset `id` from `dir`, compute `metric` and write its result file
/// into `dir`. Returns the computed value.
pub fn run<B, P>(backend: &B, metric: Metric, dir: P, id: &str) -> Result<f64>
where
    B: GraphAlgorithms,
    P: AsRef<Path>,
{
    let dir = dir.as_ref();
    let raw = graph_io::load(dir, id)?;
    info!(
        "dataset {}: {} nodes, {} edges",
        id,
        raw.node_count(),
        raw.edge_count()
    );
    let graph = backend.build_graph(&raw)?;
    let value = compute(backend, metric, &graph, &raw)?;
    let path = graph_io::write_result(dir, metric.output_name(), id, value)?;
    info!("{} = {} ({})", metric, value, path.display());
    Ok(value)
}
