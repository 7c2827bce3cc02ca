//! Day 0 warm-up: sum and product of a list of integers.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 0, tags = ["2024", "warm-up"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {token:?}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<u32>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "0 1 2 3 4 5 6 7 8 9 10";

    fn solve(input: &str, part: u8) -> String {
        use aoc_solver::Solver as _;
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn parses_whitespace_separated_integers() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(parsed, (0..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn rejects_non_integers() {
        assert!(matches!(
            Solver::parse("1 2 x"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn part1_sums() {
        assert_eq!(solve(SAMPLE, 1), "55");
    }

    #[test]
    fn part2_multiplies() {
        assert_eq!(solve(SAMPLE, 2), "0");
        assert_eq!(solve("2 3 4", 2), "24");
    }
}
