//! Day 4: XMAS word search on a letter grid.

use crate::utils::grid::Grid;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input)
    }
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// True when `word` reads from `start` along `delta`.
fn word_at(grid: &Grid<u8>, start: (usize, usize), delta: (isize, isize), word: &[u8]) -> bool {
    let mut pos = start;
    for (i, &letter) in word.iter().enumerate() {
        if grid[pos] != letter {
            return false;
        }
        if i + 1 < word.len() {
            match grid.step(pos, delta) {
                Some(next) => pos = next,
                None => return false,
            }
        }
    }
    true
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count: usize = shared
            .positions()
            .filter(|&pos| shared[pos] == b'X')
            .map(|pos| {
                DIRECTIONS
                    .iter()
                    .filter(|&&delta| word_at(shared, pos, delta, b"XMAS"))
                    .count()
            })
            .sum();
        Ok(count.to_string())
    }
}

fn is_ms(a: u8, b: u8) -> bool {
    matches!((a, b), (b'M', b'S') | (b'S', b'M'))
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.rows() < 3 || shared.cols() < 3 {
            return Ok("0".to_string());
        }

        let mut count = 0;
        for r in 1..shared.rows() - 1 {
            for c in 1..shared.cols() - 1 {
                if shared[(r, c)] == b'A'
                    && is_ms(shared[(r - 1, c - 1)], shared[(r + 1, c + 1)])
                    && is_ms(shared[(r - 1, c + 1)], shared[(r + 1, c - 1)])
                {
                    count += 1;
                }
            }
        }
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "MMMSXXMASM\n\
                          MSAMXMSMSA\n\
                          AMXSXMAAMM\n\
                          MSAMASMSMX\n\
                          XMASAMXAMM\n\
                          XXAMMXXAMA\n\
                          SMSMSASXSS\n\
                          SAXAMASAAA\n\
                          MAMMMXMMMM\n\
                          MXMXAXMASX\n";

    fn solve(input: &str, part: u8) -> String {
        use aoc_solver::Solver as _;
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn word_at_follows_direction() {
        let grid = Grid::parse(SAMPLE).unwrap();
        // Row 0 "MMMSXXMASM" holds "XMAS" starting at column 5.
        assert!(word_at(&grid, (0, 5), (0, 1), b"XMAS"));
        assert!(!word_at(&grid, (0, 5), (0, -1), b"XMAS"));
        // Runs off the edge before finishing.
        assert!(!word_at(&grid, (0, 5), (-1, 1), b"XMAS"));
    }

    #[test]
    fn part1_counts_all_directions() {
        assert_eq!(solve(SAMPLE, 1), "18");
    }

    #[test]
    fn part2_counts_crossed_mas() {
        assert_eq!(solve(SAMPLE, 2), "9");
    }

    #[test]
    fn part2_needs_room_for_the_cross() {
        assert_eq!(solve("MS\nAS\n", 2), "0");
    }
}
