//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error("failed to read input file {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registration error
    #[error("registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Runner error
    #[error(transparent)]
    Run(#[from] crate::runner::RunError),
}
