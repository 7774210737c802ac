#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::BufReader;
use std::sync::Arc;
use tsp_cli::extensions::solve::config::{configure_builder_from_config, create_default_logger, read_config};
use tsp_core::prelude::*;
use tsp_core::utils::{Timer, get_cpus};
use tsp_scientific::common::write_text_solution;
use tsp_scientific::edges::EdgeListProblem;
use tsp_scientific::tsplib::TsplibProblem;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const TIME_ARG_NAME: &str = "max-time";
const WORKERS_ARG_NAME: &str = "max-workers";
const ATTEMPTS_ARG_NAME: &str = "max-attempts";
const CANDIDATES_ARG_NAME: &str = "candidates";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const ROUND_ARG_NAME: &str = "round";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

/// Cost mismatch between reported and recalculated tour cost which is tolerated by the check.
const COST_TOLERANCE: f64 = 1E-6;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds a short Hamiltonian cycle in the graph within a time limit")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(["edges", "tsplib"])
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds, default is 59")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(WORKERS_ARG_NAME)
                .help("Specifies max amount of parallel workers, zero or negative value means all cpus")
                .short('c')
                .long(WORKERS_ARG_NAME)
                .allow_negative_numbers(true)
                .required(false),
        )
        .arg(
            Arg::new(ATTEMPTS_ARG_NAME)
                .help("Specifies max amount of constructed and improved tours")
                .long(ATTEMPTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CANDIDATES_ARG_NAME)
                .help("Specifies amount of closest neighbours considered on each construction step, default is 3")
                .long(CANDIDATES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ROUND_ARG_NAME)
                .help("Rounds euclidean distances of tsplib problem to the nearest integer")
                .long(ROUND_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether final tour should be checked against the graph")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
    interruption: Option<Arc<dyn Quota + Send + Sync>>,
) -> Result<(), String> {
    let timer = Timer::start();

    // required
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem path is not specified")?;
    let problem_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("problem format is not specified")?;

    // optional
    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let max_workers = get_max_workers(matches)?;
    let max_attempts = parse_int_value::<usize>(matches, ATTEMPTS_ARG_NAME, "max attempts")?;
    let candidates = parse_int_value::<usize>(matches, CANDIDATES_ARG_NAME, "candidates")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let is_rounded = matches.get_flag(ROUND_ARG_NAME);
    let is_check_requested = matches.get_flag(CHECK_ARG_NAME);
    let logger = matches.get_flag(LOG_ARG_NAME).then(create_default_logger);
    let log = |msg: &str| {
        if let Some(logger) = &logger {
            logger(msg)
        }
    };

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| open_file(path, "config"))
        .transpose()?
        .map(|file| read_config(BufReader::new(file)).map_err(|err| format!("cannot read config: '{err}'")))
        .transpose()?;
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution"));
    let out_result = out_result.transpose()?;

    let problem_file = open_file(problem_path, "problem")?;
    let (graph, duration) = Timer::measure_duration(|| read_graph(problem_format, problem_file, is_rounded, &log));
    let graph = Arc::new(graph.map_err(|err| format!("cannot read {problem_format} problem from '{problem_path}': '{err}'"))?);
    log(&format!("loaded {} nodes / {} edges in {}ms", graph.node_count(), graph.edge_count(), duration.as_millis()));

    let builder = Builder::new(graph.clone())
        .with_max_time(max_time)
        .with_max_workers(max_workers)
        .with_max_attempts(max_attempts)
        .with_candidates_size(candidates)
        .with_seed(seed)
        .with_quota(interruption)
        .with_telemetry(logger.clone().map_or(TelemetryMode::None, |logger| TelemetryMode::OnlyLogging { logger }));

    let builder = match &config {
        Some(config) => configure_builder_from_config(builder, config),
        None => builder,
    };

    let solution = builder
        .build()
        .and_then(|solver| solver.solve())
        .map_err(|err| format!("cannot find any solution: '{err}'"))?;

    write_text_solution(out_writer_func(out_result), &solution).map_err(|err| format!("cannot write solution: '{err}'"))?;

    if is_check_requested {
        check_solution(graph.as_ref(), &solution)?;
    }

    log(&format!("execution time: {}ms", timer.elapsed_millis()));

    Ok(())
}

fn get_max_workers(matches: &ArgMatches) -> Result<Option<usize>, String> {
    let max_workers = parse_int_value::<i64>(matches, WORKERS_ARG_NAME, "max workers")?;

    Ok(max_workers.map(|workers| usize::try_from(workers).ok().filter(|&workers| workers > 0).unwrap_or_else(get_cpus)))
}

fn read_graph(format: &str, problem_file: File, is_rounded: bool, log: &dyn Fn(&str)) -> Result<Graph, String> {
    match format {
        "edges" => {
            let data = BufReader::new(problem_file).read_edges().map_err(|err| err.to_string())?;

            if data.has_node_count_mismatch() {
                eprintln!(
                    "warning: claimed node count {} mismatches actual {}",
                    data.declared_nodes,
                    data.graph.node_count()
                );
            }

            if data.skipped_lines > 0 {
                log(&format!("skipped {} lines which cannot be parsed as edges", data.skipped_lines));
            }

            Ok(data.graph)
        }
        "tsplib" => BufReader::new(problem_file).read_tsplib(is_rounded).map_err(|err| err.to_string()),
        _ => Err(format!("unknown format: '{format}'")),
    }
}

fn check_solution(graph: &Graph, solution: &Solution) -> Result<(), String> {
    if solution.is_empty() && graph.node_count() > 0 {
        return Err("cannot check solution: no tour is found".to_string());
    }

    let cost = check_tour(graph, solution.tour.as_slice()).map_err(|err| format!("solution check failed: '{err}'"))?;

    if (cost - solution.cost).abs() > COST_TOLERANCE * cost.max(1.) {
        return Err(format!("solution check failed: reported cost {} differs from actual {cost}", solution.cost));
    }

    println!("solution check is completed successfully");

    Ok(())
}
