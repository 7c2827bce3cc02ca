//! Day 2: reactor level reports, with and without the Problem Dampener.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024", "reports"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<u32>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        token.parse().map_err(|_| {
                            ParseError::InvalidFormat(format!("expected level: {token:?}"))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

/// A report is safe when its levels are strictly monotonic and adjacent
/// levels differ by 1 to 3.
fn is_safe(report: &[u32]) -> bool {
    if report.len() < 2 {
        return true;
    }
    let increasing = report[1] > report[0];
    report
        .iter()
        .tuple_windows()
        .all(|(a, b)| (b > a) == increasing && (1..=3).contains(&a.abs_diff(*b)))
}

/// Safe as-is, or safe after removing any single level.
fn is_safe_with_dampener(report: &[u32]) -> bool {
    if is_safe(report) {
        return true;
    }
    (0..report.len()).any(|skip| {
        let dampened: Vec<u32> = report
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, &level)| level)
            .collect();
        is_safe(&dampened)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared.iter().filter(|report| is_safe(report)).count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_with_dampener(report))
            .count();
        Ok(safe.to_string())
    }
}
