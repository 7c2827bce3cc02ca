//! Day 5: page ordering rules for safety manual updates.

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, HashSet};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "ordering"])]
pub struct Solver;

#[derive(Debug, Default)]
pub struct ManualUpdates {
    /// For each page, the set of pages that must come after it.
    rules: HashMap<u32, HashSet<u32>>,
    updates: Vec<Vec<u32>>,
}

impl ManualUpdates {
    /// An update is ordered when every adjacent pair of ruled pages obeys
    /// the rules. Pages no rule mentions are unconstrained.
    fn is_correct_order(&self, update: &[u32]) -> bool {
        update.windows(2).all(|pair| {
            let (a, b) = (pair[0], pair[1]);
            match (self.rules.get(&a), self.rules.get(&b)) {
                (Some(successors), Some(_)) => successors.contains(&b),
                _ => true,
            }
        })
    }

    /// Reorder `update` to satisfy the rules via depth-first traversal.
    /// The rules give a total order over any one update's pages, so the
    /// result is unique.
    fn reorder(&self, update: &[u32]) -> Vec<u32> {
        let pages: HashSet<u32> = update.iter().copied().collect();
        // Pages outside the update are treated as already emitted so the
        // traversal never leaves the update.
        let mut seen: HashSet<u32> = self
            .rules
            .keys()
            .copied()
            .filter(|page| !pages.contains(page))
            .collect();

        let mut ordered = Vec::with_capacity(update.len());
        for &page in update {
            self.visit(page, &mut seen, &mut ordered);
        }
        ordered.reverse();
        ordered
    }

    fn visit(&self, page: u32, seen: &mut HashSet<u32>, ordered: &mut Vec<u32>) {
        if !seen.insert(page) {
            return;
        }
        if let Some(successors) = self.rules.get(&page) {
            for &next in successors {
                self.visit(next, seen, ordered);
            }
        }
        ordered.push(page);
    }
}

impl AocParser for Solver {
    type SharedData<'a> = ManualUpdates;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_sections(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_sections(input: &str) -> anyhow::Result<ManualUpdates> {
    let (rule_block, update_block) = input
        .split_once("\n\n")
        .context("missing blank line between rules and updates")?;

    let mut parsed = ManualUpdates::default();
    for line in rule_block.lines() {
        let (before, after) = line
            .split_once('|')
            .with_context(|| format!("malformed rule: {line:?}"))?;
        let before: u32 = before.trim().parse().context("rule page")?;
        let after: u32 = after.trim().parse().context("rule page")?;
        parsed.rules.entry(before).or_default().insert(after);
        parsed.rules.entry(after).or_default();
    }

    for line in update_block.lines().filter(|line| !line.is_empty()) {
        let update = line
            .split(',')
            .map(|page| page.trim().parse().context("update page"))
            .collect::<anyhow::Result<Vec<u32>>>()?;
        parsed.updates.push(update);
    }
    Ok(parsed)
}

fn middle_page(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|update| shared.is_correct_order(update))
            .map(|update| middle_page(update))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|update| !shared.is_correct_order(update))
            .map(|update| middle_page(&shared.reorder(update)))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "47|53\n97|13\n97|61\n97|47\n75|29\n61|13\n75|53\n29|13\n97|29\n53|29\n\
                          61|53\n97|53\n61|29\n47|13\n75|47\n97|75\n47|61\n75|61\n47|29\n75|13\n\
                          53|13\n\
                          \n\
                          75,47,61,53,29\n\
                          97,61,53,29,13\n\
                          75,29,13\n\
                          75,97,47,61,53\n\
                          61,13,29\n\
                          97,13,75,29,47\n";

    fn solve(input: &str, part: u8) -> String {
        use aoc_solver::Solver as _;
        let mut shared = Solver::parse(input).unwrap();
        Solver::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn parse_splits_rules_and_updates() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(parsed.updates.len(), 6);
        assert!(parsed.rules[&47].contains(&53));
        assert!(parsed.rules.contains_key(&13));
    }

    #[test]
    fn parse_requires_blank_separator() {
        assert!(matches!(
            Solver::parse("1|2\n1,2\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn order_check_matches_rules() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert!(parsed.is_correct_order(&[75, 47, 61, 53, 29]));
        assert!(parsed.is_correct_order(&[97, 61, 53, 29, 13]));
        assert!(parsed.is_correct_order(&[75, 29, 13]));
        assert!(!parsed.is_correct_order(&[75, 97, 47, 61, 53]));
        assert!(!parsed.is_correct_order(&[61, 13, 29]));
        assert!(!parsed.is_correct_order(&[97, 13, 75, 29, 47]));
        // Unruled pages never break an update.
        assert!(parsed.is_correct_order(&[75, 100, 29, 13]));
    }

    #[test]
    fn reorder_fixes_incorrect_updates() {
        let parsed = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            parsed.reorder(&[75, 97, 47, 61, 53]),
            vec![97, 75, 47, 61, 53]
        );
        assert_eq!(parsed.reorder(&[61, 13, 29]), vec![61, 29, 13]);
        assert_eq!(
            parsed.reorder(&[97, 13, 75, 29, 47]),
            vec![97, 75, 47, 29, 13]
        );
    }

    #[test]
    fn part1_sums_middle_pages_of_ordered_updates() {
        assert_eq!(solve(SAMPLE, 1), "143");
    }

    #[test]
    fn part2_sums_middle_pages_after_reordering() {
        assert_eq!(solve(SAMPLE, 2), "123");
    }
}
