//! Reading `vertices_<id>.txt`/`edges_<id>.txt` datasets, writing
//! `<metric>_<id>.txt` results and keeping per-metric value windows.
#[macro_use]
extern crate log;
extern crate tempfile;
extern crate thiserror;
pub mod error;
pub mod gp;
pub mod loader;
pub mod subdue;
pub mod writer;
pub use error::Error;
pub use loader::{load, RawGraph};
pub use writer::{format_value, write_result};

pub type Result<T> = std::result::Result<T, Error>;
