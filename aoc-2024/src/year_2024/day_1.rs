//! Day 1: total distance and similarity score between two location lists.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "lists"])]
pub struct Solver;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Lists {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Lists;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lists = Lists::default();

        for (i, token) in input.split_whitespace().enumerate() {
            let id = token
                .parse()
                .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {token:?}")))?;
            if i % 2 == 0 {
                lists.left.push(id);
            } else {
                lists.right.push(id);
            }
        }

        if lists.left.len() != lists.right.len() {
            return Err(ParseError::MissingData(
                "left and right lists differ in length".into(),
            ));
        }
        Ok(lists)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.left.sort_unstable();
        shared.right.sort_unstable();

        let distance: u32 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| l.abs_diff(*r))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let right_counts = shared.right.iter().counts();

        let similarity: u32 = shared
            .left
            .iter()
            .map(|l| l * right_counts.get(l).copied().unwrap_or(0) as u32)
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    fn solve(input: &str, part: u8) -> String {
        use aoc_solver::Solver as _;
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn parses_interleaved_columns() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            parsed,
            Lists {
                left: vec![3, 4, 2, 1, 3, 3],
                right: vec![4, 3, 5, 3, 9, 3],
            }
        );
    }

    #[test]
    fn rejects_uneven_columns() {
        assert!(matches!(
            Solver::parse("1 2\n3"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn part1_total_distance() {
        assert_eq!(solve(SAMPLE, 1), "11");
    }

    #[test]
    fn part2_similarity_score() {
        assert_eq!(solve(SAMPLE, 2), "31");
    }
}
