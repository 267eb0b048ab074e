//! Heuristic comparison demo.
//!
//! Generates random grids and reports per-heuristic success rate,
//! average path length, and average wall time. The seed is fixed so a
//! run is reproducible; override it with the `SEED` environment
//! variable.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use search_bench::bench::{run_heuristic_comparison, ComparisonConfig};

fn main() {
    let seed = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = ComparisonConfig::default();
    let reports = run_heuristic_comparison(&config, &mut rng);

    println!("Heuristic Comparison ({} runs, seed {seed})", config.trials);
    println!("--------------------------------------");
    for report in reports {
        println!("{}:", report.heuristic);
        println!("  Success Rate: {:.2}%", report.success_rate());
        println!("  Avg Path Length: {:.2}", report.avg_path_len());
        println!("  Avg Time (ms): {:.2}", report.avg_time_ms());
        println!();
    }
}
