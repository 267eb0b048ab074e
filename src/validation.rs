//! Input validation for benchmark instances.
//!
//! Checks the structural preconditions the algorithms assume:
//! - Grid start/goal in bounds, on free cells, and distinct
//! - Non-empty slot and subject sets
//! - No duplicate slots
//!
//! The algorithms themselves never re-check these; a generated input
//! that passes validation cannot make them fail.

use std::collections::HashSet;

use crate::models::{Grid, TimetableProblem};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Grid has no cells.
    EmptyGrid,
    /// Start or goal lies outside the grid.
    OutOfBounds,
    /// Start or goal sits on an obstacle.
    BlockedEndpoint,
    /// Start and goal are the same cell.
    CoincidentEndpoints,
    /// Timetable has no slots.
    EmptySlotSet,
    /// Timetable has no candidate subjects.
    EmptySubjectList,
    /// The same (day, period) slot appears twice.
    DuplicateSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a grid instance for search.
pub fn validate_grid(grid: &Grid) -> ValidationResult {
    let mut errors = Vec::new();

    if grid.size() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGrid,
            "grid has no cells",
        ));
        return Err(errors);
    }

    for (label, cell) in [("start", grid.start), ("goal", grid.goal)] {
        if !grid.in_bounds(cell) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfBounds,
                format!("{label} {cell} is outside the {0}x{0} grid", grid.size()),
            ));
        } else if !grid.is_free(cell) {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlockedEndpoint,
                format!("{label} {cell} sits on an obstacle"),
            ));
        }
    }

    if grid.start == grid.goal {
        errors.push(ValidationError::new(
            ValidationErrorKind::CoincidentEndpoints,
            format!("start and goal are both {}", grid.start),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a timetable instance for solving.
pub fn validate_timetable(problem: &TimetableProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.slots.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySlotSet,
            "timetable has no slots",
        ));
    }
    if problem.subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySubjectList,
            "timetable has no candidate subjects",
        ));
    }

    let mut seen = HashSet::new();
    for slot in &problem.slots {
        if !seen.insert(*slot) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlot,
                format!("slot {slot} appears more than once"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
