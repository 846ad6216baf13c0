extern crate graph_metrics;
use graph_metrics::cli;
fn main() {
    std::process::exit(cli::main_generic());
}
