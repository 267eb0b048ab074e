//! Distance heuristics for grid search.

use serde::{Deserialize, Serialize};

use crate::models::Cell;

/// Estimate of remaining cost from a cell to the goal.
///
/// With unit-cost 4-directional movement the true remaining cost is the
/// Manhattan distance, so all three variants are admissible: Euclidean
/// and Chebyshev underestimate it and merely guide the search less
/// tightly. The benchmark exists to measure that difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heuristic {
    /// L1 distance: `|dx| + |dy|`.
    Manhattan,
    /// L2 distance: `sqrt(dx^2 + dy^2)`.
    Euclidean,
    /// L-infinity (diagonal) distance: `max(|dx|, |dy|)`.
    Chebyshev,
}

impl Heuristic {
    /// All variants, in benchmark reporting order.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
    ];

    /// Estimated cost from `a` to `b`. Always non-negative.
    pub fn estimate(&self, a: Cell, b: Cell) -> f64 {
        let dx = (a.x - b.x).abs() as f64;
        let dy = (a.y - b.y).abs() as f64;
        match self {
            Heuristic::Manhattan => dx + dy,
            Heuristic::Euclidean => dx.hypot(dy),
            Heuristic::Chebyshev => dx.max(dy),
        }
    }

    /// Display name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::Euclidean => "Euclidean",
            Heuristic::Chebyshev => "Chebyshev",
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
