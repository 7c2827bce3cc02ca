//! Error types for the solver framework.

use thiserror::Error;

/// Error produced while parsing puzzle input.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected structure.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from the input.
    #[error("missing data: {0}")]
    MissingData(String),
    /// Any other parsing failure.
    #[error("parse error: {0}")]
    Other(String),
}

/// Error produced while solving a single part.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part number has no implementation on this solver.
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number is outside `1..=PARTS`.
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// The part logic itself failed.
    #[error("solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap an arbitrary error as a solve failure.
    pub fn failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::SolveFailed(Box::new(err))
    }
}

/// Error produced by registry operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day.
    #[error("no solver registered for year {0} day {1}")]
    NotFound(u16, u8),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error produced while registering solvers.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year-day combination.
    #[error("duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// The day number is outside the supported range.
    #[error("day {0} is out of range (0-25)")]
    InvalidDay(u8),
}
