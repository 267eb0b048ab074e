//! Constraint-satisfaction timetable solvers.
//!
//! Two interchangeable strategies over the same recursive skeleton:
//!
//! - [`solve_backtracking`]: plain chronological backtracking with
//!   randomized value ordering.
//! - [`solve_forward_checking`]: the same search augmented with domain
//!   pruning — assigning a subject removes it from every other
//!   unassigned slot's domain, and an emptied domain rejects the
//!   assignment before recursing.
//!
//! Both count backtracks identically (one increment per variable whose
//! candidate values are exhausted) so the strategies can be compared.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6

mod backtrack;
mod forward;

use serde::{Deserialize, Serialize};

use crate::models::Slot;

pub use backtrack::solve_backtracking;
pub use forward::solve_forward_checking;

/// Outcome of a solver run.
///
/// On success the assignment holds one entry per slot, sorted
/// chronologically; on failure it is empty (all tentative assignments
/// are undone on the way out).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CspSolution {
    /// Whether a complete consistent assignment was found.
    pub solved: bool,
    /// Variables whose candidate values were exhausted during search.
    pub backtracks: u64,
    /// Slot -> subject entries, sorted by slot.
    pub assignment: Vec<(Slot, String)>,
}

impl CspSolution {
    fn new(solved: bool, backtracks: u64, assignment: Vec<(Slot, String)>) -> Self {
        let mut assignment = assignment;
        assignment.sort_by_key(|(slot, _)| *slot);
        Self {
            solved,
            backtracks,
            assignment,
        }
    }

    /// Subject assigned to a slot, if any.
    pub fn subject_for(&self, slot: Slot) -> Option<&str> {
        self.assignment
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, subject)| subject.as_str())
    }
}
