//! Advent of Code 2024 puzzle solutions.
//!
//! Each day registers itself with the aoc-solver plugin registry, so
//! linking this crate is enough to make every solver available to a
//! [`RegistryBuilder`](aoc_solver::RegistryBuilder).

pub mod utils;
pub mod year_2024;
