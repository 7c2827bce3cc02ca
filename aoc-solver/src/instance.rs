//! Solver instances: parsed input bundled with timing.

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with solve timestamps.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string.
    pub answer: String,
    /// When solving started (UTC).
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC).
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Time spent solving.
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver bound to parsed input for one year-day problem.
///
/// Parsing happens once in [`SolverInstance::new`]; parts then share the
/// parsed data (and any intermediate results a solver caches in it).
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long that took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased solver interface used by the registry and the CLI.
pub trait DynSolver {
    /// Solve the given part, timing the computation.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// The year this solver answers for.
    fn year(&self) -> u16;

    /// The day this solver answers for.
    fn day(&self) -> u8;

    /// Number of parts the solver implements.
    fn parts(&self) -> u8;

    /// When parsing started (UTC).
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing completed (UTC).
    fn parse_end(&self) -> DateTime<Utc>;

    /// Time spent parsing.
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }
}
