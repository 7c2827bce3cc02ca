//! Core solver traits.

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by a solver's parts.
///
/// The shared data can use any ownership strategy: an owned `Vec<T>` or
/// custom struct (simplest, supports mutation between parts), or `&'a str`
/// for zero-copy access when the raw input is all a solver needs.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Solver;
///
/// impl AocParser for Solver {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.parse()
///                     .map_err(|_| ParseError::InvalidFormat(format!("expected integer: {l:?}")))
///             })
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate state shared between parts.
    ///
    /// The `'a` outlives bound lets instances holding borrowed shared data
    /// be boxed for the lifetime of the input.
    type SharedData<'a>: 'a;

    /// Parse the raw input string.
    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError>;
}

/// Solves one statically-numbered part of a puzzle.
///
/// Implement `PartSolver<1>`, `PartSolver<2>`, ... and let
/// `#[derive(AocSolver)]` assemble the runtime dispatch. The shared data is
/// mutable so parts can cache work that both parts need.
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part, returning the answer as a string.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime part dispatch over a solver's `PartSolver` impls.
///
/// Usually generated by `#[derive(AocSolver)]` with
/// `#[aoc_solver(max_parts = N)]`; a manual impl only needs to match on
/// `part` and return [`SolveError::PartNotImplemented`] for the rest.
pub trait Solver: AocParser {
    /// Number of parts this solver implements.
    const PARTS: u8;

    /// Solve the given part (1-based).
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, blanket-implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
