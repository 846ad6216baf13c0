use crate::backend::AlgorithmError;
use crate::metric::Metric;
use graph_io::error::{EXIT_COMPUTATION, EXIT_MALFORMED};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] graph_io::Error),
    #[error("node {id} is declared more than once")]
    DuplicateNode { id: i64 },
    #[error("edge ({from}, {to}) references undeclared node {missing}")]
    InvalidEdgeEndpoint { from: i64, to: i64, missing: i64 },
    #[error("{metric}: computation failed: {source}")]
    ComputationFailed {
        metric: Metric,
        source: AlgorithmError,
    },
    #[error("{metric}: division by zero, the graph has no nodes")]
    DivisionByZero { metric: Metric },
}

impl Error {
    /// Process exit status: 2 input file, 3 malformed input, 4 computation,
    /// 5 output file.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Input(e) => e.exit_code(),
            Error::DuplicateNode { .. } | Error::InvalidEdgeEndpoint { .. } => EXIT_MALFORMED,
            Error::ComputationFailed { .. } | Error::DivisionByZero { .. } => EXIT_COMPUTATION,
        }
    }
}
