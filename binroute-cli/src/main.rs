//! A command line interface to the waste collection route optimizer.

mod commands;
use self::commands::create_write_buffer;
use self::commands::solve::{get_solve_app, run_solve};

use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Waste Collection Route Optimizer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the waste collection route optimizer")
        .subcommand(get_solve_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
