//! Backtracking with forward checking.
//!
//! After each tentative assignment the chosen subject is removed from
//! the domain of every other unassigned slot. The rule is deliberately
//! global — each subject is usable once across the entire remaining
//! slot set — so instances with more slots than subjects are
//! unsolvable under this strategy. Pruning works on a copied domain
//! map per branch; discarding the copy restores the parent's domains
//! on backtrack.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::CspSolution;
use crate::models::{Slot, TimetableProblem};

/// Solves a timetable instance by backtracking with forward checking.
///
/// Every slot starts with the full subject list as its domain. An
/// assignment that empties any other unassigned slot's domain is
/// rejected before recursing, which is where this strategy saves work
/// over plain backtracking.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use search_bench::csp::solve_forward_checking;
/// use search_bench::models::TimetableProblem;
///
/// // Four slots, five subjects: solvable, each subject used at most once.
/// let problem = TimetableProblem::new(
///     1,
///     4,
///     vec!["Math".into(), "Physics".into(), "Chemistry".into(), "CS".into(), "English".into()],
/// );
/// let mut rng = SmallRng::seed_from_u64(42);
/// let solution = solve_forward_checking(&problem, &mut rng);
/// assert!(solution.solved);
/// ```
pub fn solve_forward_checking<R: Rng>(problem: &TimetableProblem, rng: &mut R) -> CspSolution {
    let domains: HashMap<Slot, Vec<String>> = problem
        .slots
        .iter()
        .map(|&slot| (slot, problem.subjects.clone()))
        .collect();

    let mut search = Search {
        assignment: HashMap::new(),
        backtracks: 0,
        rng,
    };
    let mut unassigned: Vec<Slot> = problem.slots.clone();
    let solved = search.solve(&mut unassigned, &domains);
    CspSolution::new(solved, search.backtracks, search.assignment.into_iter().collect())
}

struct Search<'a, R: Rng> {
    assignment: HashMap<Slot, String>,
    backtracks: u64,
    rng: &'a mut R,
}

impl<R: Rng> Search<'_, R> {
    fn solve(&mut self, unassigned: &mut Vec<Slot>, domains: &HashMap<Slot, Vec<String>>) -> bool {
        let slot = match unassigned.pop() {
            Some(slot) => slot,
            None => return true,
        };

        let mut values = domains.get(&slot).cloned().unwrap_or_default();
        values.shuffle(self.rng);

        for value in values {
            self.assignment.insert(slot, value.clone());
            if let Some(pruned) = prune(slot, &value, domains) {
                if self.solve(unassigned, &pruned) {
                    return true;
                }
            }
            self.assignment.remove(&slot);
        }

        unassigned.push(slot);
        self.backtracks += 1;
        false
    }
}

/// Copies the domains minus the assigned slot, removing `value` from
/// every remaining domain. `None` when any domain empties.
fn prune(
    slot: Slot,
    value: &str,
    domains: &HashMap<Slot, Vec<String>>,
) -> Option<HashMap<Slot, Vec<String>>> {
    let mut next = HashMap::with_capacity(domains.len().saturating_sub(1));
    for (&other, domain) in domains {
        if other == slot {
            continue;
        }
        let remaining: Vec<String> = domain.iter().filter(|v| *v != value).cloned().collect();
        if remaining.is_empty() {
            return None;
        }
        next.insert(other, remaining);
    }
    Some(next)
}
