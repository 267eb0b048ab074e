//! Random instance generation.
//!
//! Produces benchmark inputs: randomized obstacle grids with a
//! validated start/goal pair, and timetable instances over the full
//! days x periods slot set. All randomness flows through a
//! caller-supplied RNG so runs are reproducible from a seed.

use rand::Rng;

use crate::models::{Cell, Grid, TimetableProblem};

/// Configuration for random grid generation.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    /// Side length of the square grid.
    pub size: usize,
    /// Probability that any given cell is an obstacle.
    pub obstacle_prob: f64,
}

impl GridGenerator {
    /// Creates a generator.
    ///
    /// # Panics
    /// If `size < 2` — a distinct start/goal pair needs two cells.
    pub fn new(size: usize, obstacle_prob: f64) -> Self {
        assert!(size >= 2, "grid needs at least two cells for start and goal");
        Self {
            size,
            obstacle_prob,
        }
    }

    /// Generates a grid with independently sampled obstacles and a
    /// distinct, non-obstacle start/goal pair.
    ///
    /// If sampling leaves fewer than two free cells, obstacles are
    /// cleared at random until the start/goal draw can terminate.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Grid {
        let n = self.size as i32;
        let mut grid = Grid::open(self.size, Cell::new(0, 0), Cell::new(0, 0));

        for y in 0..n {
            for x in 0..n {
                if rng.random_bool(self.obstacle_prob.clamp(0.0, 1.0)) {
                    grid.set_obstacle(Cell::new(x, y), true);
                }
            }
        }

        while grid.free_count() < 2 {
            let cell = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
            grid.set_obstacle(cell, false);
        }

        let start = loop {
            let cell = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
            if grid.is_free(cell) {
                break cell;
            }
        };
        let goal = loop {
            let cell = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
            if grid.is_free(cell) && cell != start {
                break cell;
            }
        };

        grid.start = start;
        grid.goal = goal;
        grid
    }
}

/// Configuration for timetable instance generation.
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    /// Days per week.
    pub days: u8,
    /// Periods per day.
    pub periods: u8,
    /// Candidate subject labels.
    pub subjects: Vec<String>,
    /// Teacher labels.
    pub teachers: Vec<String>,
    /// Room labels.
    pub rooms: Vec<String>,
}

impl TimetableGenerator {
    /// The benchmark's default instance: a five-day, four-period week
    /// with five subjects, three teachers, and two rooms.
    pub fn default_week() -> Self {
        Self {
            days: 5,
            periods: 4,
            subjects: ["Math", "Physics", "Chemistry", "CS", "English"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            teachers: ["T1", "T2", "T3"].iter().map(|s| s.to_string()).collect(),
            rooms: ["R1", "R2"].iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builds the timetable instance over the full slot set.
    pub fn generate(&self) -> TimetableProblem {
        TimetableProblem::new(self.days, self.periods, self.subjects.clone())
            .with_teachers(self.teachers.clone())
            .with_rooms(self.rooms.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_grid;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_grid_is_valid() {
        let gen = GridGenerator::new(20, 0.25);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..10 {
            let grid = gen.generate(&mut rng);
            assert!(validate_grid(&grid).is_ok());
        }
    }

    #[test]
    fn test_start_goal_free_and_distinct() {
        let gen = GridGenerator::new(8, 0.5);
        let mut rng = SmallRng::seed_from_u64(1);
        let grid = gen.generate(&mut rng);
        assert!(grid.is_free(grid.start));
        assert!(grid.is_free(grid.goal));
        assert_ne!(grid.start, grid.goal);
    }

    #[test]
    fn test_saturated_grid_still_terminates() {
        // All cells sampled as obstacles; the generator must carve out
        // room for start and goal.
        let gen = GridGenerator::new(5, 1.0);
        let mut rng = SmallRng::seed_from_u64(9);
        let grid = gen.generate(&mut rng);
        assert!(grid.free_count() >= 2);
        assert_ne!(grid.start, grid.goal);
    }

    #[test]
    fn test_zero_probability_gives_open_grid() {
        let gen = GridGenerator::new(6, 0.0);
        let mut rng = SmallRng::seed_from_u64(3);
        let grid = gen.generate(&mut rng);
        assert_eq!(grid.free_count(), 36);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let gen = GridGenerator::new(10, 0.3);
        let a = gen.generate(&mut SmallRng::seed_from_u64(5));
        let b = gen.generate(&mut SmallRng::seed_from_u64(5));
        assert_eq!(a.start, b.start);
        assert_eq!(a.goal, b.goal);
        assert_eq!(a.free_count(), b.free_count());
    }

    #[test]
    fn test_default_week_instance() {
        let problem = TimetableGenerator::default_week().generate();
        assert_eq!(problem.slot_count(), 20);
        assert_eq!(problem.subjects.len(), 5);
        assert_eq!(problem.teachers.len(), 3);
        assert_eq!(problem.rooms.len(), 2);
    }
}
