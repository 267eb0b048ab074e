//! Timetable solver demo.
//!
//! Solves the default five-day week with both strategies and prints
//! backtrack counts and the resulting assignment. The seed is fixed
//! for reproducibility; override it with the `SEED` environment
//! variable.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use search_bench::bench::run_strategy_comparison;
use search_bench::generator::TimetableGenerator;

fn main() {
    let seed = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = SmallRng::seed_from_u64(seed);

    let problem = TimetableGenerator::default_week().generate();

    for report in run_strategy_comparison(&problem, &mut rng) {
        println!("=== {} ===", report.strategy);
        println!(
            "Solved: {}, Time: {:.2} ms, Backtracks: {}",
            report.solution.solved, report.elapsed_ms, report.solution.backtracks
        );
        for (slot, subject) in &report.solution.assignment {
            println!("{slot} -> {subject}");
        }
        println!();
    }
}
