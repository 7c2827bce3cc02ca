//! Day 8: count antinodes created by pairs of same-frequency antennae.

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct AntennaMap {
    height: usize,
    width: usize,
    /// Antenna positions keyed by frequency byte.
    antennae: HashMap<u8, Vec<(usize, usize)>>,
}

impl AocParser for Solver {
    type SharedData<'a> = AntennaMap;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.lines();
        let first = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("empty antenna map".into()))?;

        let width = first.len();
        let mut antennae: HashMap<u8, Vec<(usize, usize)>> = HashMap::new();
        let mut height = 0;
        for line in std::iter::once(first).chain(lines) {
            if line.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "map line {} is {} wide, expected {width}",
                    height + 1,
                    line.len()
                )));
            }
            for (col, byte) in line.bytes().enumerate() {
                if byte != b'.' {
                    antennae.entry(byte).or_default().push((height, col));
                }
            }
            height += 1;
        }

        Ok(AntennaMap {
            height,
            width,
            antennae,
        })
    }
}

/// The two antinodes of an antenna pair, at twice the distance of one
/// antenna from the other, kept only when they land on the map.
fn antinodes(
    a: (usize, usize),
    b: (usize, usize),
    height: usize,
    width: usize,
) -> Vec<(usize, usize)> {
    let mirror = |x: (usize, usize), y: (usize, usize)| -> Option<(usize, usize)> {
        let row = 2 * x.0 as isize - y.0 as isize;
        let col = 2 * x.1 as isize - y.1 as isize;
        ((0..height as isize).contains(&row) && (0..width as isize).contains(&col))
            .then_some((row as usize, col as usize))
    };
    [mirror(a, b), mirror(b, a)].into_iter().flatten().collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut unique: HashSet<(usize, usize)> = HashSet::new();
        for positions in shared.antennae.values() {
            for (i, &a) in positions.iter().enumerate() {
                for &b in &positions[i + 1..] {
                    unique.extend(antinodes(a, b, shared.height, shared.width));
                }
            }
        }
        Ok(unique.len().to_string())
    }
}
