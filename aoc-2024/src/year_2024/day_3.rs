//! Day 3: scan corrupted memory for `mul(a,b)` instructions, honoring
//! `do()`/`don't()` toggles in part 2.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "scanning"])]
pub struct Solver;

impl AocParser for Solver {
    // The token scan works directly on the raw text.
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mul = Regex::new(r"mul\((\d+),(\d+)\)").map_err(SolveError::failed)?;

        let mut total: u64 = 0;
        for caps in mul.captures_iter(shared) {
            let a: u64 = caps[1].parse().map_err(SolveError::failed)?;
            let b: u64 = caps[2].parse().map_err(SolveError::failed)?;
            total += a * b;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let instruction =
            Regex::new(r"do\(\)|don't\(\)|mul\((\d+),(\d+)\)").map_err(SolveError::failed)?;

        let mut total: u64 = 0;
        let mut enabled = true;
        for caps in instruction.captures_iter(shared) {
            match &caps[0] {
                "do()" => enabled = true,
                "don't()" => enabled = false,
                _ => {
                    if enabled {
                        let a: u64 = caps[1].parse().map_err(SolveError::failed)?;
                        let b: u64 = caps[2].parse().map_err(SolveError::failed)?;
                        total += a * b;
                    }
                }
            }
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(input: &str, part: u8) -> String {
        use aoc_solver::Solver as _;
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn part1_sums_valid_muls() {
        let sample = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(solve(sample, 1), "161");
    }

    #[test]
    fn part1_ignores_malformed_tokens() {
        assert_eq!(solve("mul(4*, mul(6,9!, ?(12,34), mul ( 2 , 4 )", 1), "0");
    }

    #[test]
    fn part2_honors_toggles() {
        let sample = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(solve(sample, 2), "48");
    }

    #[test]
    fn part2_starts_enabled() {
        assert_eq!(solve("mul(3,3)don't()mul(5,5)", 2), "9");
    }
}
