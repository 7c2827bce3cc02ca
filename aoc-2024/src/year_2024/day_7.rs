//! Day 7: calibration equations solved by inserting operators left to
//! right.

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    answer: u64,
    operands: Vec<u64>,
}

#[derive(Debug, Clone, Copy)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

fn digits(n: u64) -> u32 {
    if n == 0 { 1 } else { n.ilog10() + 1 }
}

impl Operator {
    fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Self::Add => a + b,
            Self::Multiply => a * b,
            Self::Concatenate => a * 10u64.pow(digits(b)) + b,
        }
    }
}

impl Equation {
    /// Breadth-first search over operator choices, evaluated strictly left
    /// to right.
    fn can_be_true(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        // Every operator is non-decreasing on positive operands, so values
        // past the answer are dead ends. A zero operand breaks that
        // (multiplication resets to 0), so the cutoff only applies without
        // one.
        let monotonic = rest.iter().all(|&operand| operand > 0);

        let mut frontier = VecDeque::from([(0usize, first)]);
        while let Some((i, value)) = frontier.pop_front() {
            if i == rest.len() {
                if value == self.answer {
                    return true;
                }
                continue;
            }
            for op in operators {
                let next = op.apply(value, rest[i]);
                if !monotonic || next <= self.answer {
                    frontier.push_back((i + 1, next));
                }
            }
        }
        false
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| parse_equation(line).map_err(|e| ParseError::InvalidFormat(format!("{e:#}"))))
            .collect()
    }
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (answer, operands) = line
        .split_once(':')
        .with_context(|| format!("missing ':' in {line:?}"))?;
    let answer = answer.trim().parse().context("equation answer")?;
    let operands = operands
        .split_whitespace()
        .map(|token| token.parse().context("equation operand"))
        .collect::<anyhow::Result<Vec<u64>>>()?;
    Ok(Equation { answer, operands })
}

fn total_calibration(equations: &[Equation], operators: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|eq| eq.can_be_true(operators))
        .map(|eq| eq.answer)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_calibration(shared, &[Operator::Add, Operator::Multiply]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let operators = [Operator::Add, Operator::Multiply, Operator::Concatenate];
        Ok(total_calibration(shared, &operators).to_string())
    }
}
