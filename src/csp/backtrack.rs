//! Plain chronological backtracking.
//!
//! Variable order is arbitrary (the last of the unassigned list);
//! no minimum-remaining-values selection is applied. Value order is
//! the subject list reshuffled at every call, so runs are deterministic
//! only for a fixed RNG seed.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::CspSolution;
use crate::models::{Slot, TimetableProblem};

/// Solves a timetable instance by chronological backtracking.
///
/// The consistency rule accepts a subject for a slot when no other
/// already-assigned slot shares its (day, period). Slots are unique by
/// construction, so the rule only guards against duplicate insertion —
/// teacher and room exclusivity are not modeled.
///
/// # Example
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use search_bench::csp::solve_backtracking;
/// use search_bench::models::TimetableProblem;
///
/// let problem = TimetableProblem::new(5, 4, vec!["Math".into(), "CS".into()]);
/// let mut rng = SmallRng::seed_from_u64(42);
/// let solution = solve_backtracking(&problem, &mut rng);
/// assert!(solution.solved);
/// assert_eq!(solution.assignment.len(), 20);
/// ```
pub fn solve_backtracking<R: Rng>(problem: &TimetableProblem, rng: &mut R) -> CspSolution {
    let mut search = Search {
        subjects: &problem.subjects,
        assignment: HashMap::new(),
        backtracks: 0,
        rng,
    };
    let mut unassigned: Vec<Slot> = problem.slots.clone();
    let solved = search.solve(&mut unassigned);
    CspSolution::new(solved, search.backtracks, search.assignment.into_iter().collect())
}

struct Search<'a, R: Rng> {
    subjects: &'a [String],
    assignment: HashMap<Slot, String>,
    backtracks: u64,
    rng: &'a mut R,
}

impl<R: Rng> Search<'_, R> {
    fn solve(&mut self, unassigned: &mut Vec<Slot>) -> bool {
        let slot = match unassigned.pop() {
            Some(slot) => slot,
            None => return true,
        };

        for value in self.ordered_values() {
            if is_consistent(slot, &self.assignment) {
                self.assignment.insert(slot, value);
                if self.solve(unassigned) {
                    return true;
                }
                self.assignment.remove(&slot);
            }
        }

        // All candidates failed: restore the slot and report upward.
        unassigned.push(slot);
        self.backtracks += 1;
        false
    }

    fn ordered_values(&mut self) -> Vec<String> {
        let mut values = self.subjects.to_vec();
        values.shuffle(self.rng);
        values
    }
}

fn is_consistent(slot: Slot, assignment: &HashMap<Slot, String>) -> bool {
    assignment
        .keys()
        .all(|s| s.day != slot.day || s.period != slot.period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn subjects() -> Vec<String> {
        ["Math", "Physics", "Chemistry", "CS", "English"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_full_week_is_satisfiable() {
        let problem = TimetableProblem::new(5, 4, subjects());
        let mut rng = SmallRng::seed_from_u64(7);
        let solution = solve_backtracking(&problem, &mut rng);

        assert!(solution.solved);
        assert_eq!(solution.assignment.len(), 20);
        assert_eq!(solution.backtracks, 0);
        for slot in &problem.slots {
            let subject = solution.subject_for(*slot).expect("slot unassigned");
            assert!(problem.subjects.iter().any(|s| s == subject));
        }
    }

    #[test]
    fn test_no_subjects_fails() {
        let problem = TimetableProblem::new(2, 2, Vec::new());
        let mut rng = SmallRng::seed_from_u64(7);
        let solution = solve_backtracking(&problem, &mut rng);

        assert!(!solution.solved);
        assert!(solution.assignment.is_empty());
        // Only the first variable is ever reached.
        assert_eq!(solution.backtracks, 1);
    }

    #[test]
    fn test_failure_leaves_no_partial_assignment() {
        let problem = TimetableProblem::new(3, 3, Vec::new());
        let mut rng = SmallRng::seed_from_u64(99);
        let solution = solve_backtracking(&problem, &mut rng);
        assert!(solution.assignment.is_empty());
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let problem = TimetableProblem::new(3, 2, subjects());

        let mut rng_a = SmallRng::seed_from_u64(1234);
        let mut rng_b = SmallRng::seed_from_u64(1234);
        let a = solve_backtracking(&problem, &mut rng_a);
        let b = solve_backtracking(&problem, &mut rng_b);

        assert_eq!(a.assignment, b.assignment);
        assert_eq!(a.backtracks, b.backtracks);
    }

    #[test]
    fn test_consistency_rejects_duplicate_slot_key() {
        let mut assignment = HashMap::new();
        assignment.insert(Slot::new(1, 1), "Math".to_string());
        assert!(!is_consistent(Slot::new(1, 1), &assignment));
        assert!(is_consistent(Slot::new(1, 2), &assignment));
    }

    #[test]
    fn test_single_slot() {
        let problem = TimetableProblem::new(1, 1, vec!["Math".into()]);
        let mut rng = SmallRng::seed_from_u64(0);
        let solution = solve_backtracking(&problem, &mut rng);
        assert!(solution.solved);
        assert_eq!(solution.subject_for(Slot::new(1, 1)), Some("Math"));
    }
}
