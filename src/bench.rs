//! Benchmark runners and aggregate reports.
//!
//! Repeats each algorithm over generated instances and accumulates the
//! figures the demo binaries print: per-heuristic success rate, average
//! path length, and average wall time; per-strategy solved flag,
//! backtrack count, and elapsed time. Timing is incidental reporting —
//! the algorithmic contracts do not depend on it.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::csp::{solve_backtracking, solve_forward_checking, CspSolution};
use crate::generator::GridGenerator;
use crate::models::TimetableProblem;
use crate::pathfinding::{astar, Heuristic};

/// Configuration for the heuristic comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Number of random grids to generate.
    pub trials: u32,
    /// Side length of each grid.
    pub grid_size: usize,
    /// Obstacle probability per cell.
    pub obstacle_prob: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            grid_size: 20,
            obstacle_prob: 0.25,
        }
    }
}

/// Accumulated results for one heuristic across all trials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicReport {
    /// The heuristic measured.
    pub heuristic: Heuristic,
    /// Trials run.
    pub runs: u32,
    /// Trials where a path was found.
    pub successes: u32,
    /// Sum of path lengths over successful trials.
    pub total_path_len: u64,
    /// Sum of nodes expanded over all trials.
    pub total_expanded: u64,
    /// Sum of wall time over all trials (ms).
    pub total_time_ms: f64,
}

impl HeuristicReport {
    fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            runs: 0,
            successes: 0,
            total_path_len: 0,
            total_expanded: 0,
            total_time_ms: 0.0,
        }
    }

    /// Fraction of trials where the goal was reached, in percent.
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.successes as f64 * 100.0 / self.runs as f64
    }

    /// Mean path length over successful trials; 0 when none succeeded.
    pub fn avg_path_len(&self) -> f64 {
        if self.successes == 0 {
            return 0.0;
        }
        self.total_path_len as f64 / self.successes as f64
    }

    /// Mean wall time per trial (ms).
    pub fn avg_time_ms(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_time_ms / self.runs as f64
    }
}

/// Runs A* under every heuristic on a shared sequence of random grids.
///
/// Each trial generates one grid and searches it once per heuristic, so
/// the heuristics are compared on identical inputs.
pub fn run_heuristic_comparison<R: Rng>(
    config: &ComparisonConfig,
    rng: &mut R,
) -> Vec<HeuristicReport> {
    let generator = GridGenerator::new(config.grid_size, config.obstacle_prob);
    let mut reports: Vec<HeuristicReport> =
        Heuristic::ALL.iter().map(|&h| HeuristicReport::new(h)).collect();

    for _ in 0..config.trials {
        let grid = generator.generate(rng);
        for report in &mut reports {
            let started = Instant::now();
            let outcome = astar(&grid, report.heuristic);
            report.total_time_ms += started.elapsed().as_secs_f64() * 1e3;

            report.runs += 1;
            report.total_expanded += outcome.nodes_expanded as u64;
            if let Some(len) = outcome.path_len {
                report.successes += 1;
                report.total_path_len += u64::from(len);
            }
        }
    }

    reports
}

/// The two timetable search strategies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Plain chronological backtracking.
    Backtracking,
    /// Backtracking with forward-checking domain pruning.
    ForwardChecking,
}

impl Strategy {
    /// Display name for reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Backtracking => "Backtracking",
            Strategy::ForwardChecking => "Forward Checking",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one strategy run on one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    /// The strategy run.
    pub strategy: Strategy,
    /// Wall time for the run (ms).
    pub elapsed_ms: f64,
    /// The solver outcome, including backtracks and the assignment.
    pub solution: CspSolution,
}

/// Runs both timetable strategies on the same instance.
///
/// Each strategy starts from an empty assignment; the RNG is shared, so
/// value orderings differ between the two runs but are reproducible
/// from the seed.
pub fn run_strategy_comparison<R: Rng>(
    problem: &TimetableProblem,
    rng: &mut R,
) -> Vec<StrategyReport> {
    let mut reports = Vec::with_capacity(2);

    let started = Instant::now();
    let solution = solve_backtracking(problem, rng);
    reports.push(StrategyReport {
        strategy: Strategy::Backtracking,
        elapsed_ms: started.elapsed().as_secs_f64() * 1e3,
        solution,
    });

    let started = Instant::now();
    let solution = solve_forward_checking(problem, rng);
    reports.push(StrategyReport {
        strategy: Strategy::ForwardChecking,
        elapsed_ms: started.elapsed().as_secs_f64() * 1e3,
        solution,
    });

    reports
}
