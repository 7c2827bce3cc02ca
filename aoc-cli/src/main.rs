//! Command-line interface for running Advent of Code solvers on a local
//! input file.

mod cli;
mod error;
mod output;
mod runner;

// Import aoc-2024 to link the solver plugins
use aoc_2024 as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use error::CliError;
use log::info;
use output::OutputFormatter;
use std::path::Path;

fn main() {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns whether every requested part solved successfully.
fn run(args: Args) -> Result<bool, CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    info!("{} solver(s) registered", registry.len());

    let input = read_input(&args.input)?;
    let outcomes = runner::run(&registry, args.year, args.day, args.part, &input)?;

    let formatter = OutputFormatter::new(args.quiet);
    let mut all_ok = true;
    for outcome in &outcomes {
        all_ok &= formatter.print_outcome(outcome);
    }
    Ok(all_ok)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
