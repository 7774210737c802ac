use super::*;
use std::io::Read;
use tsp_cli::extensions::solve::interruption::InterruptionQuota;

const SQUARE_EDGES_PATH: &str = "../data/edges/square.txt";
const CITIES_EDGES_PATH: &str = "../data/edges/us_cities.txt";
const DISCONNECTED_EDGES_PATH: &str = "../data/edges/disconnected.txt";
const BERLIN_TSPLIB_PATH: &str = "../data/tsplib/berlin10.tsp";
const CONFIG_PATH: &str = "../data/config/config.json";

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_solve_with_out_writer(matches: &ArgMatches) -> Result<(), String> {
    run_solve(matches, |_| BufWriter::new(Box::new(DummyWrite {})), None)
}

fn get_matches(format: &str, path: &str, params: &[&str]) -> ArgMatches {
    let args = [&["solve", format, path], params].concat();

    get_solve_app().try_get_matches_from(args).unwrap()
}

fn solve_into_string(format: &str, path: &str, params: &[&str]) -> String {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let out_path = tmpfile.path().to_str().unwrap();
    let matches = get_matches(format, path, &[params, &["--out-result", out_path][..]].concat());

    run_solve(&matches, create_write_buffer, None).unwrap();

    let mut buffer = String::new();
    tmpfile.reopen().unwrap().read_to_string(&mut buffer).unwrap();

    buffer
}

#[test]
fn can_solve_edges_problem_with_attempts_limit() {
    let result = solve_into_string("edges", SQUARE_EDGES_PATH, &["--max-attempts", "10", "--check"]);

    let lines = result.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Tour: "));
    assert_eq!(lines[0].split_whitespace().count(), 5);
    assert_eq!(lines[1], "Cost 4.0000");
    assert!(lines[2].starts_with("Attempts "));
}

#[test]
fn can_solve_tsplib_problem_with_time_limit() {
    let matches = get_matches("tsplib", BERLIN_TSPLIB_PATH, &["--max-time", "0.1", "--round", "--check"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_solve_with_all_cpus_and_seed() {
    let matches =
        get_matches("edges", CITIES_EDGES_PATH, &["-c", "-1", "--seed", "42", "--max-attempts", "20", "--log"]);

    run_solve_with_out_writer(&matches).unwrap();
}

#[test]
fn can_replay_with_one_worker_and_seed() {
    let params = ["-c", "1", "--seed", "7", "--max-attempts", "5", "--candidates", "2"];

    let first = solve_into_string("edges", CITIES_EDGES_PATH, &params);
    let second = solve_into_string("edges", CITIES_EDGES_PATH, &params);

    assert_eq!(first, second);
    assert!(first.ends_with("Attempts 5\n"));
}

#[test]
fn can_use_config_file() {
    let result = solve_into_string("edges", CITIES_EDGES_PATH, &["--config", CONFIG_PATH, "--max-attempts", "5"]);

    let attempts = result
        .lines()
        .find_map(|line| line.strip_prefix("Attempts "))
        .and_then(|attempts| attempts.parse::<usize>().ok())
        .expect("cannot find attempts");
    assert!(attempts >= 100, "unexpected result: {result}");
}

#[test]
fn can_write_no_solution_for_disconnected_graph() {
    let result = solve_into_string("edges", DISCONNECTED_EDGES_PATH, &["--max-time", "0.05"]);

    assert!(result.starts_with("No solution found\n"));
}

#[test]
fn can_fail_check_when_no_solution_found() {
    let matches = get_matches("edges", DISCONNECTED_EDGES_PATH, &["--max-time", "0.05", "--check"]);

    let result = run_solve_with_out_writer(&matches);

    assert_eq!(result, Err("cannot check solution: no tour is found".to_string()));
}

#[test]
fn can_stop_on_interruption() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let matches = get_matches("edges", CITIES_EDGES_PATH, &["-o", tmpfile.path().to_str().unwrap()]);
    let quota = InterruptionQuota::default();
    quota.interrupt();

    let timer = Timer::start();
    run_solve(&matches, create_write_buffer, Some(Arc::new(quota))).unwrap();

    let mut buffer = String::new();
    tmpfile.reopen().unwrap().read_to_string(&mut buffer).unwrap();
    assert_eq!(buffer, "No solution found\nAttempts 0\n");
    assert!(timer.elapsed_secs_as_f64() < 10.);
}

#[test]
fn can_report_invalid_argument_value() {
    let matches = get_matches("edges", SQUARE_EDGES_PATH, &["--max-time", "abc"]);

    let result = run_solve_with_out_writer(&matches);

    assert_eq!(result, Err("cannot get float value, error: 'invalid float literal': 'max time'".to_string()));
}

#[test]
fn can_report_missing_problem_file() {
    let matches = get_matches("edges", "../data/edges/unknown.txt", &[]);

    let result = run_solve_with_out_writer(&matches);

    assert!(result.is_err_and(|err| err.starts_with("cannot open problem file '../data/edges/unknown.txt'")));
}

#[test]
fn can_require_problem_path() {
    for format in &["edges", "tsplib"] {
        get_solve_app().try_get_matches_from(vec!["solve", format]).unwrap_err();
    }
}

#[test]
fn can_reject_unknown_format() {
    get_solve_app().try_get_matches_from(vec!["solve", "solomon", SQUARE_EDGES_PATH]).unwrap_err();
}
