//! A* search over a 4-connected grid.
//!
//! # Algorithm
//!
//! Classic A* with a binary-heap frontier ordered by `f = g + h` and
//! lazy deletion: instead of decreasing a queued node's priority, a
//! fresh entry is pushed and stale entries are skipped when popped.
//! Each cell is expanded at most once and never re-opened, which keeps
//! the frontier discipline simple; with the admissible, consistent
//! heuristics in this crate the result is still optimal.
//!
//! Discovered nodes live in an arena, with predecessor links stored as
//! arena indices. Path length is reconstructed by walking those links
//! from the goal back to the start.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Heuristic;
use crate::models::{Cell, Grid};

/// Result of a single A* run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Number of edges on the found path, `None` when the goal is
    /// unreachable from the start.
    pub path_len: Option<u32>,
    /// Cells expanded before termination (diagnostic only).
    pub nodes_expanded: usize,
}

impl SearchOutcome {
    /// Whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.path_len.is_some()
    }
}

/// A discovered cell with its cost-from-start and predecessor link.
struct Node {
    cell: Cell,
    g: f64,
    parent: Option<usize>,
}

/// Frontier entry: arena index keyed by `f = g + h`.
///
/// Ordered as a min-heap on `f` (reversed comparison under
/// `BinaryHeap`'s max-heap semantics). Ties break arbitrarily.
struct OpenEntry {
    f: f64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f)
    }
}

const DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Runs A* from the grid's start to its goal under the given heuristic.
///
/// Unit cost per orthogonal move. Unreachability is an expected outcome
/// of random grids and is reported as `path_len: None`, never an error.
///
/// # Example
/// ```
/// use search_bench::models::{Cell, Grid};
/// use search_bench::pathfinding::{astar, Heuristic};
///
/// let grid = Grid::open(5, Cell::new(0, 0), Cell::new(4, 4));
/// let outcome = astar(&grid, Heuristic::Manhattan);
/// assert_eq!(outcome.path_len, Some(8));
/// ```
pub fn astar(grid: &Grid, heuristic: Heuristic) -> SearchOutcome {
    let mut arena: Vec<Node> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut visited = vec![false; grid.size() * grid.size()];
    let mut nodes_expanded = 0usize;

    arena.push(Node {
        cell: grid.start,
        g: 0.0,
        parent: None,
    });
    open.push(OpenEntry {
        f: heuristic.estimate(grid.start, grid.goal),
        node: 0,
    });

    let mut goal_node: Option<usize> = None;

    while let Some(entry) = open.pop() {
        let idx = entry.node;
        let cell = arena[idx].cell;

        if cell == grid.goal {
            goal_node = Some(idx);
            break;
        }

        // Lazy deletion: stale duplicates of an expanded cell are skipped.
        let flat = grid.index(cell);
        if visited[flat] {
            continue;
        }
        visited[flat] = true;
        nodes_expanded += 1;

        let g_next = arena[idx].g + 1.0;
        for (dx, dy) in DIRS {
            let next = Cell::new(cell.x + dx, cell.y + dy);
            if !grid.is_free(next) || visited[grid.index(next)] {
                continue;
            }
            let node = arena.len();
            arena.push(Node {
                cell: next,
                g: g_next,
                parent: Some(idx),
            });
            open.push(OpenEntry {
                f: g_next + heuristic.estimate(next, grid.goal),
                node,
            });
        }
    }

    let path_len = goal_node.map(|mut idx| {
        let mut edges = 0u32;
        while let Some(parent) = arena[idx].parent {
            edges += 1;
            idx = parent;
        }
        edges
    });

    SearchOutcome {
        path_len,
        nodes_expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_exact_length() {
        // On an empty N x N grid the corner-to-corner path is 2(N-1)
        // for every heuristic.
        for n in [2usize, 5, 20] {
            let grid = Grid::open(n, Cell::new(0, 0), Cell::new(n as i32 - 1, n as i32 - 1));
            for h in Heuristic::ALL {
                let outcome = astar(&grid, h);
                assert_eq!(
                    outcome.path_len,
                    Some(2 * (n as u32 - 1)),
                    "heuristic {h} on {n}x{n}"
                );
            }
        }
    }

    #[test]
    fn test_unreachable_behind_wall() {
        let grid = Grid::from_rows(
            &[
                ".#.",
                ".#.",
                ".#.",
            ],
            Cell::new(0, 0),
            Cell::new(2, 2),
        );
        for h in Heuristic::ALL {
            let outcome = astar(&grid, h);
            assert_eq!(outcome.path_len, None, "heuristic {h}");
            assert!(!outcome.is_reachable());
        }
    }

    #[test]
    fn test_unique_path_agreement() {
        // A corridor leaves exactly one path; all heuristics must agree.
        let grid = Grid::from_rows(
            &[
                "...#.",
                ".#.#.",
                ".#.#.",
                ".#.#.",
                ".#...",
            ],
            Cell::new(0, 4),
            Cell::new(4, 0),
        );
        let lengths: Vec<_> = Heuristic::ALL
            .iter()
            .map(|&h| astar(&grid, h).path_len)
            .collect();
        assert_eq!(lengths, vec![Some(16), Some(16), Some(16)]);
    }

    #[test]
    fn test_detour_around_obstacle() {
        let grid = Grid::from_rows(
            &[
                "...",
                ".#.",
                "...",
            ],
            Cell::new(0, 1),
            Cell::new(2, 1),
        );
        // Straight line is blocked; shortest detour is 4 moves.
        let outcome = astar(&grid, Heuristic::Manhattan);
        assert_eq!(outcome.path_len, Some(4));
    }

    #[test]
    fn test_expansion_counter_bounded_by_free_cells() {
        let grid = Grid::open(6, Cell::new(0, 0), Cell::new(5, 5));
        for h in Heuristic::ALL {
            let outcome = astar(&grid, h);
            assert!(outcome.nodes_expanded >= 1);
            assert!(outcome.nodes_expanded <= grid.free_count());
        }
    }

    #[test]
    fn test_start_adjacent_to_goal() {
        let grid = Grid::open(3, Cell::new(1, 1), Cell::new(1, 2));
        for h in Heuristic::ALL {
            assert_eq!(astar(&grid, h).path_len, Some(1), "heuristic {h}");
        }
    }
}
