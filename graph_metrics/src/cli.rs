//! Command line handling shared by the metric binaries.
use crate::{Metric, NativeBackend};
use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub metric: Metric,
    pub dataset: String,
    pub dir: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches, metric: Metric) -> Self {
        let dataset = matches.value_of("dataset").unwrap_or_default().to_string();
        let dir = PathBuf::from(matches.value_of("dir").unwrap_or("."));
        let verbose = matches.is_present("verbose");
        Self {
            metric,
            dataset,
            dir,
            verbose,
        }
    }
}

fn with_common_args<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.version("0.1")
        .arg(
            Arg::with_name("dataset")
                .required(true)
                .value_name("ID")
                .help("Dataset identifier: reads vertices_<ID>.txt and edges_<ID>.txt")
                .index(1),
        )
        .arg(
            Arg::with_name("dir")
                .short("d")
                .long("dir")
                .value_name("DIR")
                .help("Directory holding the input files and receiving the result")
                .default_value(".")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Debug logging"),
        )
}

/// Arguments of the binary dedicated to `metric`.
pub fn metric_app(metric: Metric) -> App<'static, 'static> {
    with_common_args(App::new(metric.selector()).about(metric.description()))
}

/// Arguments of `graph_metric`, which takes the metric as an option.
pub fn generic_app() -> App<'static, 'static> {
    with_common_args(
        App::new("graph_metric").about("Compute one metric of a graph dataset.").arg(
            Arg::with_name("metric")
                .short("m")
                .long("metric")
                .required(true)
                .value_name("METRIC")
                .help("Metric to compute")
                .possible_values(&Metric::SELECTORS)
                .takes_value(true),
        ),
    )
}

pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

/// Runs the configured metric and returns the process exit code.
pub fn execute(config: &Config) -> i32 {
    debug!("{:?}", config);
    match crate::run(&NativeBackend, config.metric, &config.dir, &config.dataset) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("{} {}: {}", config.metric, config.dataset, e);
            e.exit_code()
        }
    }
}

/// Entry point of the binary dedicated to `metric`.
pub fn main_for(metric: Metric) -> i32 {
    let matches = metric_app(metric).get_matches();
    let config = Config::from_matches(&matches, metric);
    init_logger(config.verbose);
    execute(&config)
}

/// Entry point of `graph_metric`.
pub fn main_generic() -> i32 {
    let matches = generic_app().get_matches();
    let metric = value_t!(matches, "metric", Metric).unwrap_or_else(|e| e.exit());
    let config = Config::from_matches(&matches, metric);
    init_logger(config.verbose);
    execute(&config)
}
