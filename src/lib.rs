//! Informed-search benchmarks.
//!
//! Two self-contained algorithm studies sharing one crate:
//!
//! - **Grid pathfinding**: A* over random 4-connected occupancy grids,
//!   comparing Manhattan, Euclidean, and Chebyshev heuristics by
//!   success rate, path length, and wall time.
//! - **Timetable CSP**: one subject per (day, period) slot, solved by
//!   plain chronological backtracking and by backtracking with
//!   forward-checking domain pruning, compared by backtrack count.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Grid`, `Cell`, `Slot`, `TimetableProblem`
//! - **`pathfinding`**: A* search and the `Heuristic` variants
//! - **`csp`**: The two backtracking solvers and `CspSolution`
//! - **`generator`**: Seeded random instance generation
//! - **`bench`**: Trial runners and aggregate reports
//! - **`validation`**: Structural input checks
//!
//! All randomness flows through caller-supplied `rand::Rng` handles;
//! seed the RNG to make any run reproducible.
//!
//! # References
//!
//! - Hart, Nilsson, Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 3 (informed search), Ch. 6 (CSPs)

pub mod bench;
pub mod csp;
pub mod generator;
pub mod models;
pub mod pathfinding;
pub mod validation;
