//! Benchmark domain models.
//!
//! Core data types for the two problem families: occupancy grids for
//! pathfinding and slot sets for timetable scheduling. Models carry no
//! algorithm state — search bookkeeping lives with the algorithms.

mod grid;
mod timetable;

pub use grid::{Cell, Grid};
pub use timetable::{Slot, TimetableProblem};
