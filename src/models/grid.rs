//! Occupancy grid model.
//!
//! A square boolean obstacle matrix with a validated start/goal pair.
//! The grid is immutable once handed to a search — mutation methods
//! exist only for construction (generator and tests).

use serde::{Deserialize, Serialize};

/// A grid coordinate.
///
/// Signed so that neighbor arithmetic at the boundary stays in range;
/// out-of-bounds coordinates are rejected by [`Grid::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Cell {
    /// Creates a cell at (x, y).
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square occupancy grid with start and goal cells.
///
/// `true` marks an obstacle. Start and goal are expected to lie on
/// distinct free cells; [`crate::validation::validate_grid`] checks this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
    /// Search origin.
    pub start: Cell,
    /// Search target.
    pub goal: Cell,
}

impl Grid {
    /// Creates an obstacle-free grid.
    pub fn open(size: usize, start: Cell, goal: Cell) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
            start,
            goal,
        }
    }

    /// Builds a grid from row strings, `#` marking obstacles.
    ///
    /// Intended for literal grids in tests and docs. Rows must be equal
    /// in length to their count.
    ///
    /// # Example
    /// ```
    /// use search_bench::models::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&[
    ///     "..#",
    ///     ".##",
    ///     "...",
    /// ], Cell::new(0, 0), Cell::new(2, 2));
    /// assert!(grid.is_free(Cell::new(0, 0)));
    /// assert!(!grid.is_free(Cell::new(2, 0)));
    /// ```
    pub fn from_rows(rows: &[&str], start: Cell, goal: Cell) -> Self {
        let size = rows.len();
        let mut grid = Self::open(size, start, goal);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "row {y} is not {size} cells wide");
            for (x, ch) in row.bytes().enumerate() {
                if ch == b'#' {
                    grid.set_obstacle(Cell::new(x as i32, y as i32), true);
                }
            }
        }
        grid
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinate lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.size
            && (cell.y as usize) < self.size
    }

    /// Whether the cell is inside the grid and not an obstacle.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.cells[self.index(cell)]
    }

    /// Marks or clears an obstacle. Out-of-bounds cells are ignored.
    pub fn set_obstacle(&mut self, cell: Cell, obstacle: bool) {
        if self.in_bounds(cell) {
            let i = self.index(cell);
            self.cells[i] = obstacle;
        }
    }

    /// Number of non-obstacle cells.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&o| !o).count()
    }

    /// Flat index for a cell known to be in bounds.
    #[inline]
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.y as usize * self.size + cell.x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_grid_all_free() {
        let g = Grid::open(4, Cell::new(0, 0), Cell::new(3, 3));
        assert_eq!(g.free_count(), 16);
        assert!(g.is_free(Cell::new(2, 1)));
    }

    #[test]
    fn test_bounds() {
        let g = Grid::open(3, Cell::new(0, 0), Cell::new(2, 2));
        assert!(g.in_bounds(Cell::new(0, 2)));
        assert!(!g.in_bounds(Cell::new(-1, 0)));
        assert!(!g.in_bounds(Cell::new(3, 0)));
        assert!(!g.is_free(Cell::new(0, -1)));
    }

    #[test]
    fn test_set_obstacle() {
        let mut g = Grid::open(3, Cell::new(0, 0), Cell::new(2, 2));
        g.set_obstacle(Cell::new(1, 1), true);
        assert!(!g.is_free(Cell::new(1, 1)));
        assert_eq!(g.free_count(), 8);

        g.set_obstacle(Cell::new(1, 1), false);
        assert!(g.is_free(Cell::new(1, 1)));

        // Out of bounds is a no-op
        g.set_obstacle(Cell::new(9, 9), true);
        assert_eq!(g.free_count(), 9);
    }

    #[test]
    fn test_from_rows() {
        let g = Grid::from_rows(
            &[
                ".#.",
                ".#.",
                "...",
            ],
            Cell::new(0, 0),
            Cell::new(2, 0),
        );
        assert!(!g.is_free(Cell::new(1, 0)));
        assert!(!g.is_free(Cell::new(1, 1)));
        assert!(g.is_free(Cell::new(1, 2)));
        assert_eq!(g.free_count(), 7);
    }
}
