extern crate clap;
extern crate env_logger;
extern crate graph_io;
use clap::{App, Arg};
use env_logger::Env;
fn main() {
    let matches = App::new("split_subdue")
        .version("0.1")
        .about("Split a SUBDUE graph file into vertices_<ID>.txt and edges_<ID>.txt.")
        .arg(
            Arg::with_name("graph")
                .required(true)
                .value_name("GRAPH")
                .help("Graph file<SUBDUE>")
                .index(1),
        )
        .arg(
            Arg::with_name("dataset")
                .required(true)
                .value_name("ID")
                .help("Dataset identifier used in the output file names")
                .index(2),
        )
        .arg(
            Arg::with_name("dir")
                .short("d")
                .long("dir")
                .value_name("DIR")
                .help("Output directory")
                .default_value(".")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Debug logging"),
        )
        .get_matches();
    let level = if matches.is_present("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    let graph = matches.value_of("graph").unwrap_or_default();
    let dataset = matches.value_of("dataset").unwrap_or_default();
    let dir = matches.value_of("dir").unwrap_or(".");
    if let Err(e) = graph_io::subdue::split(graph, dir, dataset) {
        eprintln!("split_subdue: {}", e);
        std::process::exit(e.exit_code());
    }
}
