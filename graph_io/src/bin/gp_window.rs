#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate graph_io;
use clap::{App, Arg};
use env_logger::Env;
use graph_io::gp::{self, Entry};

fn metric_value(arg: &str) -> Option<(&str, f64)> {
    let split = arg.rfind('=')?;
    let (file, value) = (&arg[..split], &arg[split + 1..]);
    if file.is_empty() {
        return None;
    }
    value.parse().ok().map(|value| (file, value))
}

fn main() {
    let matches = App::new("gp_window")
        .version("0.1")
        .about("Add one partition's metric values to their sliding windows and flag deviations.")
        .arg(
            Arg::with_name("metrics")
                .required(true)
                .multiple(true)
                .value_name("FILE=VALUE")
                .help("Window file of a metric and the metric's value for this partition")
                .validator(|arg| match metric_value(&arg) {
                    Some(_) => Ok(()),
                    None => Err(format!("{:?} is not FILE=VALUE", arg)),
                })
                .index(1),
        )
        .arg(
            Arg::with_name("partition")
                .short("p")
                .long("partition")
                .required(true)
                .value_name("N")
                .help("Partition number")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("window")
                .short("w")
                .long("window")
                .value_name("SIZE")
                .help("Number of partitions kept in each window")
                .default_value("10")
                .validator(|arg| match arg.parse::<usize>() {
                    Ok(size) if size > 0 => Ok(()),
                    _ => Err("the window must hold at least one partition".to_string()),
                })
                .takes_value(true),
        )
        .arg(
            Arg::with_name("threshold")
                .short("t")
                .long("threshold")
                .value_name("COUNT")
                .help("Flag the partition once this many metrics deviate")
                .default_value("1")
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
    let partition = value_t!(matches, "partition", u64).unwrap_or_else(|e| e.exit());
    let window = value_t!(matches, "window", usize).unwrap_or_else(|e| e.exit());
    let threshold = value_t!(matches, "threshold", usize).unwrap_or_else(|e| e.exit());
    let mut deviations = vec![];
    for (file, value) in matches
        .values_of("metrics")
        .into_iter()
        .flatten()
        .filter_map(metric_value)
    {
        match gp::update(file, Entry { partition, value }, window) {
            Ok(deviation) => {
                println!(
                    "{}\t{:.6}\t{:.6}\t{}",
                    file, deviation.mean, deviation.std_dev, deviation.exceeded
                );
                deviations.push(deviation);
            }
            Err(e) => {
                eprintln!("gp_window: {}", e);
                std::process::exit(e.exit_code());
            }
        }
    }
    let exceeded = gp::count_exceeded(&deviations);
    println!(
        "partition {}: {} of {} metrics exceeded, flagged {}",
        partition,
        exceeded,
        deviations.len(),
        exceeded >= threshold
    );
}
