//! Shared helpers for the day solutions.

pub mod grid;
