extern crate graph_metrics;
use graph_metrics::{cli, Metric};
fn main() {
    std::process::exit(cli::main_for(Metric::Eigenvalue));
}
