//! Timetable problem model.
//!
//! A timetable instance is a fixed slot set (the Cartesian product of
//! days and periods) plus the candidate label lists the solvers draw
//! values from. Slots have structural identity: two slots with equal
//! day and period are the same slot.

use serde::{Deserialize, Serialize};

/// A (day, period) time slot.
///
/// `Ord` follows (day, period) lexicographically so that solved
/// assignments can be reported in chronological order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Slot {
    /// Day of week, 1-based.
    pub day: u8,
    /// Period within the day, 1-based.
    pub period: u8,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: u8, period: u8) -> Self {
        Self { day, period }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.day, self.period)
    }
}

/// A timetable scheduling instance.
///
/// Teachers and rooms are declared inputs of the domain but are not
/// constrained by the current solvers — the only enforced rule is
/// single assignment per slot, with forward checking additionally
/// treating each subject as usable once across the remaining slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableProblem {
    /// All slots to fill, in generation order.
    pub slots: Vec<Slot>,
    /// Candidate subjects (the value domain of every slot).
    pub subjects: Vec<String>,
    /// Teacher labels.
    pub teachers: Vec<String>,
    /// Room labels.
    pub rooms: Vec<String>,
}

impl TimetableProblem {
    /// Creates a problem over the full days x periods slot set.
    pub fn new(days: u8, periods: u8, subjects: Vec<String>) -> Self {
        let mut slots = Vec::with_capacity(days as usize * periods as usize);
        for day in 1..=days {
            for period in 1..=periods {
                slots.push(Slot::new(day, period));
            }
        }
        Self {
            slots,
            subjects,
            teachers: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Sets teacher labels.
    pub fn with_teachers(mut self, teachers: Vec<String>) -> Self {
        self.teachers = teachers;
        self
    }

    /// Sets room labels.
    pub fn with_rooms(mut self, rooms: Vec<String>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<String> {
        ["Math", "Physics", "Chemistry", "CS", "English"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_slot_set_is_cartesian_product() {
        let p = TimetableProblem::new(5, 4, subjects());
        assert_eq!(p.slot_count(), 20);
        assert!(p.slots.contains(&Slot::new(1, 1)));
        assert!(p.slots.contains(&Slot::new(5, 4)));
        assert!(!p.slots.contains(&Slot::new(6, 1)));
    }

    #[test]
    fn test_slot_structural_identity() {
        assert_eq!(Slot::new(2, 3), Slot::new(2, 3));
        assert_ne!(Slot::new(2, 3), Slot::new(3, 2));
    }

    #[test]
    fn test_slot_ordering_is_chronological() {
        let mut slots = vec![Slot::new(2, 1), Slot::new(1, 4), Slot::new(1, 2)];
        slots.sort();
        assert_eq!(slots, vec![Slot::new(1, 2), Slot::new(1, 4), Slot::new(2, 1)]);
    }

    #[test]
    fn test_builder_labels() {
        let p = TimetableProblem::new(1, 2, subjects())
            .with_teachers(vec!["T1".into(), "T2".into()])
            .with_rooms(vec!["R1".into()]);
        assert_eq!(p.teachers.len(), 2);
        assert_eq!(p.rooms.len(), 1);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::new(3, 2).to_string(), "(3,2)");
    }
}
