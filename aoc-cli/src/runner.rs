//! Looks up the requested solver and runs the selected parts.

use aoc_solver::{SolveError, SolveResult, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

/// Errors from resolving and running a solver request.
#[derive(Error, Debug)]
pub enum RunError {
    /// No solver registered for the requested year and day
    #[error("no solver for {year} day {day} (registered: {available})")]
    UnknownSolver {
        year: u16,
        day: u8,
        available: String,
    },

    /// Requested part exceeds what the solver implements
    #[error("part {part} requested but {year} day {day} has {parts} part(s)")]
    PartOutOfRange {
        year: u16,
        day: u8,
        part: u8,
        parts: u8,
    },

    /// Solver error (lookup, parse)
    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}

/// Result of running one part.
#[derive(Debug)]
pub struct PartOutcome {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<SolveResult, SolveError>,
    pub parse_duration: TimeDelta,
}

/// Parse the input once and solve the selected parts in order.
///
/// With no part filter every part the solver implements runs; a failing
/// part is reported in its outcome and does not stop later parts.
pub fn run(
    registry: &SolverRegistry,
    year: u16,
    day: u8,
    part_filter: Option<u8>,
    input: &str,
) -> Result<Vec<PartOutcome>, RunError> {
    let info = registry
        .info(year, day)
        .ok_or_else(|| RunError::UnknownSolver {
            year,
            day,
            available: registry
                .iter_info()
                .map(|i| format!("{}/{}", i.year, i.day))
                .join(", "),
        })?;

    if let Some(part) = part_filter {
        if part > info.parts {
            return Err(RunError::PartOutOfRange {
                year,
                day,
                part,
                parts: info.parts,
            });
        }
    }

    let mut solver = registry.create_solver(year, day, input)?;
    debug!(
        "parsed {year} day {day} input in {}µs",
        solver.parse_duration().num_microseconds().unwrap_or(0)
    );

    let parts: Vec<u8> = match part_filter {
        Some(part) => vec![part],
        None => (1..=info.parts).collect(),
    };

    Ok(parts
        .into_iter()
        .map(|part| PartOutcome {
            year,
            day,
            part,
            answer: solver.solve(part),
            parse_duration: solver.parse_duration(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, RegisterableSolver, RegistryBuilder, Solver};

    struct Echo;

    impl AocParser for Echo {
        type SharedData<'a> = &'a str;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input)
        }
    }

    impl Solver for Echo {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_string()),
                2 => Ok(shared.chars().rev().collect()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry() -> SolverRegistry {
        Echo.register_with(RegistryBuilder::new(), 2024, 1)
            .unwrap()
            .build()
    }

    #[test]
    fn runs_all_parts_by_default() {
        let outcomes = run(&registry(), 2024, 1, None, "abc").unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].answer.as_ref().unwrap().answer, "abc");
        assert_eq!(outcomes[1].answer.as_ref().unwrap().answer, "cba");
    }

    #[test]
    fn part_filter_selects_one_part() {
        let outcomes = run(&registry(), 2024, 1, Some(2), "abc").unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].part, 2);
        assert_eq!(outcomes[0].answer.as_ref().unwrap().answer, "cba");
    }

    #[test]
    fn unknown_day_lists_registered_solvers() {
        let err = run(&registry(), 2024, 9, None, "abc").unwrap_err();
        match err {
            RunError::UnknownSolver { available, .. } => assert_eq!(available, "2024/1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn part_exceeding_parts_is_an_error() {
        struct OnePart;

        impl AocParser for OnePart {
            type SharedData<'a> = ();

            fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
                Ok(())
            }
        }

        impl Solver for OnePart {
            const PARTS: u8 = 1;

            fn solve_part(
                _shared: &mut Self::SharedData<'_>,
                part: u8,
            ) -> Result<String, SolveError> {
                match part {
                    1 => Ok("ok".to_string()),
                    _ => Err(SolveError::PartNotImplemented(part)),
                }
            }
        }

        let registry = OnePart
            .register_with(RegistryBuilder::new(), 2024, 8)
            .unwrap()
            .build();
        let err = run(&registry, 2024, 8, Some(2), "").unwrap_err();
        assert!(matches!(
            err,
            RunError::PartOutOfRange {
                part: 2,
                parts: 1,
                ..
            }
        ));
    }
}
