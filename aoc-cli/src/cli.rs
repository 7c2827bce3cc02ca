//! CLI argument parsing using clap

use aoc_solver::MAX_DAY;
use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc2024", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_DAY as i64))]
    pub day: u8,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Event year
    #[arg(short, long, default_value_t = 2024)]
    pub year: u16,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Puzzle input file
    pub input: PathBuf,
}
