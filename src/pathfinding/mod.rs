//! Informed grid search.
//!
//! A* over 4-connected occupancy grids with pluggable distance
//! heuristics. The benchmark compares the three classic estimates
//! (Manhattan, Euclidean, Chebyshev) on identical grids.
//!
//! # Reference
//! - Hart, Nilsson, Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 3

mod astar;
mod heuristic;

pub use astar::{astar, SearchOutcome};
pub use heuristic::Heuristic;
