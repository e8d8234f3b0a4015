use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use benchplot::config::{load_chart_config, ChartConfig};
use benchplot::report::build_report;
use benchplot::scenario::load_scenario_set;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("BENCHPLOT_LOG", "error,benchplot=info"))
        .init();

    let matches = Command::new("benchplot")
        .version(clap::crate_version!())
        .about("Render benchmark results as an interactive HTML report")
        .arg_required_else_help(true)
        .arg(
            Arg::new("scenarios")
                .help("Path to the scenario JSON produced by the benchmarking engine")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("File the HTML report is written to")
                .default_value("benchmark_report.html")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a chart configuration file overriding axis and chart titles")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .help("Report title")
                .default_value("Benchmark Report")
                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("Report generation failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let scenarios_path: &PathBuf = matches
        .get_one("scenarios")
        .context("Missing scenarios path")?;
    let output_path: &PathBuf = matches.get_one("output").context("Missing output path")?;
    let title: &String = matches.get_one("title").context("Missing title")?;

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("Loading chart config from {}", path.display());
            load_chart_config(path)?
        }
        None => ChartConfig::default(),
    };

    let set = load_scenario_set(scenarios_path)?;
    let report = build_report(&set, &config, title)
        .with_context(|| format!("Failed to build report from {}", scenarios_path.display()))?;
    report.save_to_file(output_path)?;
    Ok(())
}
