//! Framework for registering and running Advent of Code solvers.
//!
//! Each puzzle is a type implementing [`AocParser`] (how to turn the raw
//! input into shared data) and [`PartSolver<N>`](PartSolver) for each part.
//! `#[derive(AocSolver)]` assembles the runtime [`Solver`] dispatch and
//! `#[derive(AutoRegisterSolver)]` submits the type to the plugin registry,
//! so a binary only has to build a [`SolverRegistry`] and ask it for
//! solvers by year and day.
//!
//! ```
//! use aoc_solver::{
//!     AocParser, ParseError, PartSolver, RegisterableSolver, RegistryBuilder, SolveError,
//!     Solver,
//! };
//!
//! struct Example;
//!
//! impl AocParser for Example {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Example {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<u32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = Example
//!     .register_with(RegistryBuilder::new(), 2024, 1)
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    MAX_DAY, RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin,
    SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-exported for the derive macros.
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
