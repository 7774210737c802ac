//! A command line interface to *Travelling Salesman Problem* solver.
//!

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::solve::{get_solve_app, run_solve};
use std::process;
use tsp_cli::extensions::solve::interruption::create_interruption_quota;

fn main() {
    let matches = Command::new("Travelling Salesman Problem Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to bounded time Travelling Salesman Problem solver")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => create_interruption_quota()
            .map_err(|err| err.to_string())
            .and_then(|quota| run_solve(solve_matches, create_write_buffer, Some(quota))),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
