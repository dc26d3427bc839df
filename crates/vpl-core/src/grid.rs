//! Discrete grid topology
//!
//! The facility is laid out on a bounded `rows x cols` grid of cells with
//! 4-connectivity (Manhattan distance 1). The topology answers adjacency and
//! distance queries for the formulation layers and is immutable once sized.

use crate::error::{VplError, VplResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single grid position, identified by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Manhattan distance to another cell.
    pub fn manhattan(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The bounded cell universe with its adjacency and distance queries.
///
/// Stateless after construction; all queries are pure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTopology {
    rows: usize,
    cols: usize,
}

impl GridTopology {
    /// Create a grid. Non-positive dimensions are a configuration error.
    pub fn new(rows: usize, cols: usize) -> VplResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(VplError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        Ok(GridTopology { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// The 4-neighbors of a cell (up, down, left, right), fewer at boundaries.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(4);
        if cell.row > 0 {
            neighbors.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.row + 1 < self.rows {
            neighbors.push(Cell::new(cell.row + 1, cell.col));
        }
        if cell.col > 0 {
            neighbors.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.cols {
            neighbors.push(Cell::new(cell.row, cell.col + 1));
        }
        neighbors
    }

    /// Cells within Manhattan distance `radius` of `cell`, excluding the cell
    /// itself. Used for the pad spacing exclusion zone.
    pub fn cells_within(&self, cell: Cell, radius: usize) -> Vec<Cell> {
        let mut result = Vec::new();
        let row_lo = cell.row.saturating_sub(radius);
        let row_hi = (cell.row + radius).min(self.rows - 1);
        for row in row_lo..=row_hi {
            let col_lo = cell.col.saturating_sub(radius);
            let col_hi = (cell.col + radius).min(self.cols - 1);
            for col in col_lo..=col_hi {
                let other = Cell::new(row, col);
                if other != cell && cell.manhattan(other) <= radius {
                    result.push(other);
                }
            }
        }
        result
    }

    /// Whether a cell lies on the outer ring of the grid.
    pub fn is_boundary(&self, cell: Cell) -> bool {
        cell.row == 0 || cell.row == self.rows - 1 || cell.col == 0 || cell.col == self.cols - 1
    }

    /// The fixed flow source for connectivity certification (top-left corner).
    pub fn source(&self) -> Cell {
        Cell::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_grid() {
        assert!(GridTopology::new(0, 8).is_err());
        assert!(GridTopology::new(5, 0).is_err());
        assert!(GridTopology::new(0, 0).is_err());
    }

    #[test]
    fn test_cell_enumeration() {
        let grid = GridTopology::new(3, 4).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[11], Cell::new(2, 3));
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = GridTopology::new(3, 3).unwrap();
        assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 2); // corner
        assert_eq!(grid.neighbors(Cell::new(0, 1)).len(), 3); // edge
        assert_eq!(grid.neighbors(Cell::new(1, 1)).len(), 4); // interior
    }

    #[test]
    fn test_degenerate_grid_has_no_neighbors() {
        let grid = GridTopology::new(1, 1).unwrap();
        assert!(grid.neighbors(Cell::new(0, 0)).is_empty());
        assert!(grid.cells_within(Cell::new(0, 0), 2).is_empty());
        assert!(grid.is_boundary(Cell::new(0, 0)));
    }

    #[test]
    fn test_cells_within_radius() {
        let grid = GridTopology::new(5, 5).unwrap();
        let center = Cell::new(2, 2);
        let ball = grid.cells_within(center, 2);
        // Manhattan ball of radius 2 around an interior cell: 12 cells.
        assert_eq!(ball.len(), 12);
        assert!(!ball.contains(&center));
        assert!(ball.iter().all(|c| center.manhattan(*c) <= 2));

        // Truncated at the corner.
        let corner_ball = grid.cells_within(Cell::new(0, 0), 2);
        assert_eq!(corner_ball.len(), 5);
    }

    #[test]
    fn test_boundary_predicate() {
        let grid = GridTopology::new(3, 4).unwrap();
        assert!(grid.is_boundary(Cell::new(0, 2)));
        assert!(grid.is_boundary(Cell::new(2, 2)));
        assert!(grid.is_boundary(Cell::new(1, 0)));
        assert!(grid.is_boundary(Cell::new(1, 3)));
        assert!(!grid.is_boundary(Cell::new(1, 1)));
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(2, 3)), 5);
        assert_eq!(Cell::new(4, 1).manhattan(Cell::new(1, 1)), 3);
        assert_eq!(Cell::new(2, 2).manhattan(Cell::new(2, 2)), 0);
    }
}
