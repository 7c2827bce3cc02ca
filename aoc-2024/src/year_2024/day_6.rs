//! Day 6: trace the guard's patrol route and find obstruction spots that
//! trap her in a loop.

use crate::utils::grid::Grid;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct Patrol {
    maze: Grid<u8>,
    start: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn turn_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

enum WalkOutcome {
    /// The guard left the grid; the set holds every cell she visited.
    Exited(HashSet<(usize, usize)>),
    /// The guard re-entered a previous position and heading.
    Looped,
}

/// Simulate the patrol from `start` facing north, optionally with one
/// extra obstacle placed on the map.
fn walk(
    maze: &Grid<u8>,
    start: (usize, usize),
    extra_obstacle: Option<(usize, usize)>,
) -> WalkOutcome {
    let mut pos = start;
    let mut dir = Direction::North;
    let mut visited = HashSet::new();
    let mut states = HashSet::new();

    loop {
        visited.insert(pos);
        if !states.insert((pos, dir)) {
            return WalkOutcome::Looped;
        }
        match maze.step(pos, dir.delta()) {
            None => return WalkOutcome::Exited(visited),
            Some(next) => {
                if maze[next] == b'#' || Some(next) == extra_obstacle {
                    dir = dir.turn_right();
                } else {
                    pos = next;
                }
            }
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Patrol;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let maze = Grid::parse(input)?;
        let start = maze
            .positions()
            .find(|&pos| maze[pos] == b'^')
            .ok_or_else(|| ParseError::MissingData("no guard position '^' on the map".into()))?;
        Ok(Patrol { maze, start })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        match walk(&shared.maze, shared.start, None) {
            WalkOutcome::Exited(visited) => Ok(visited.len().to_string()),
            WalkOutcome::Looped => Err(SolveError::SolveFailed(
                anyhow!("guard patrol loops without an added obstacle").into(),
            )),
        }
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Only cells on the unobstructed route can change the walk.
        let route = match walk(&shared.maze, shared.start, None) {
            WalkOutcome::Exited(visited) => visited,
            WalkOutcome::Looped => {
                return Err(SolveError::SolveFailed(
                    anyhow!("guard patrol loops without an added obstacle").into(),
                ));
            }
        };

        let loops = route
            .into_iter()
            .filter(|&cell| cell != shared.start)
            .filter(|&cell| matches!(walk(&shared.maze, shared.start, Some(cell)), WalkOutcome::Looped))
            .count();
        Ok(loops.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "....#.....\n\
                          .........#\n\
                          ..........\n\
                          ..#.......\n\
                          .......#..\n\
                          ..........\n\
                          .#..^.....\n\
                          ........#.\n\
                          #.........\n\
                          ......#...\n";

    fn solve(input: &str, part: u8) -> String {
        use aoc_solver::Solver as _;
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn parse_locates_the_guard() {
        let patrol = Solver::parse(SAMPLE).unwrap();
        assert_eq!(patrol.start, (6, 4));
    }

    #[test]
    fn parse_requires_a_guard() {
        assert!(matches!(
            Solver::parse("....\n....\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    #[test]
    fn walk_exits_open_maps() {
        let patrol = Solver::parse(SAMPLE).unwrap();
        match walk(&patrol.maze, patrol.start, None) {
            WalkOutcome::Exited(visited) => assert_eq!(visited.len(), 41),
            WalkOutcome::Looped => panic!("patrol should exit"),
        }
    }

    #[test]
    fn walk_detects_loops() {
        let patrol = Solver::parse(SAMPLE).unwrap();
        // Placing an obstruction just below the guard loops the sample.
        assert!(matches!(
            walk(&patrol.maze, patrol.start, Some((6, 3))),
            WalkOutcome::Looped
        ));
    }

    #[test]
    fn part1_counts_visited_cells() {
        assert_eq!(solve(SAMPLE, 1), "41");
    }

    #[test]
    fn part2_counts_loop_obstructions() {
        assert_eq!(solve(SAMPLE, 2), "6");
    }
}
