//! A command line interface to multi-agent patrol route generation.
//!

mod commands;

use clap::Command;
use commands::create_write_buffer;
use commands::dispatch::{get_dispatch_app, run_dispatch};
use commands::solve::{get_solve_app, run_solve};
use std::process;

fn main() {
    let matches = Command::new("Multi-agent patrol route solver")
        .version("0.1")
        .about("A command line interface to generate patrol routes over a weighted graph")
        .subcommand(get_solve_app())
        .subcommand(get_dispatch_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("dispatch", dispatch_matches)) => run_dispatch(dispatch_matches, create_write_buffer),
        _ => {
            eprintln!("No subcommand was used. Use -h to print help information.");
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
