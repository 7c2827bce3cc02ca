//! Registry mapping (year, day) to solver factories.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Highest valid day number. Day 0 is allowed for warm-up puzzles.
pub const MAX_DAY: u8 = 25;

/// Factory creating a solver instance from raw input.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver implements.
    pub parts: u8,
}

struct SolverEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for a [`SolverRegistry`].
///
/// Registration is chainable and rejects duplicate (year, day) pairs; the
/// built registry is immutable.
///
/// ```no_run
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a factory for a specific year and day.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if day > MAX_DAY {
            return Err(RegistrationError::InvalidDay(day));
        }
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            SolverEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register every solver submitted via `#[derive(AutoRegisterSolver)]`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_plugins_where(|_| true)
    }

    /// Register only the submitted solvers matching `filter`, e.g. by tag
    /// or year.
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry.
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table of solver factories.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for (year, day).
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Metadata for a registered solver, if any.
    pub fn info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.solvers.get(&(year, day)).map(|e| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Metadata for all registered solvers, ordered by year then day.
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), e)| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Type-erased self-registration, blanket-implemented for every [`Solver`].
///
/// This is what lets `SolverPlugin` hold solvers with different associated
/// types in one inventory collection.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }
}

/// A solver submitted for automatic registration.
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; the optional tags
/// support filtered registration via
/// [`RegistryBuilder::register_plugins_where`].
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};
    use crate::solver::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = Vec<u32>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .split_whitespace()
                .map(|t| {
                    t.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("bad integer {t:?}")))
                })
                .collect()
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.iter().map(|n| n * 2).sum::<u32>().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry_with_doubler() -> SolverRegistry {
        Doubler
            .register_with(RegistryBuilder::new(), 2024, 1)
            .unwrap()
            .build()
    }

    #[test]
    fn create_and_solve() {
        let registry = registry_with_doubler();
        let mut solver = registry.create_solver(2024, 1, "1 2 3").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "12");
    }

    #[test]
    fn unknown_day_is_not_found() {
        let registry = registry_with_doubler();
        let result = registry.create_solver(2024, 2, "");
        assert!(matches!(result, Err(SolverError::NotFound(2024, 2))));
    }

    #[test]
    fn parse_failure_surfaces() {
        let registry = registry_with_doubler();
        let result = registry.create_solver(2024, 1, "not a number");
        assert!(matches!(result, Err(SolverError::Parse(_))));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let builder = Doubler
            .register_with(RegistryBuilder::new(), 2024, 1)
            .unwrap();
        let result = Doubler.register_with(builder, 2024, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2024, 1))
        ));
    }

    #[test]
    fn day_out_of_range_rejected() {
        let result = Doubler.register_with(RegistryBuilder::new(), 2024, 26);
        assert!(matches!(result, Err(RegistrationError::InvalidDay(26))));
    }

    #[test]
    fn info_reports_parts() {
        let registry = registry_with_doubler();
        let info = registry.info(2024, 1).unwrap();
        assert_eq!(info.parts, 1);
        assert_eq!(registry.iter_info().count(), 1);
        assert!(registry.info(2023, 1).is_none());
    }
}
