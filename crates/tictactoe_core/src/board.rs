//! The 3x3 grid of cells.

use crate::types::{Cell, Coord, Marker, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only go from `Empty` to `Marked` through [`Board::place`] and only
/// return to `Empty` through [`Board::reset`], which clears all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the grid, indexed `[row][col]`.
    pub fn get(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }

    /// Gets the cell at a coordinate.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.grid[coord.row()][coord.col()]
    }

    /// Places a marker at (row, col).
    ///
    /// Returns `false` and leaves the board untouched when the coordinate is
    /// out of range or the cell is already marked.
    #[instrument(skip(self))]
    pub fn place(&mut self, marker: Marker, row: i64, col: i64) -> bool {
        match Coord::new(row, col) {
            Some(coord) => self.place_at(marker, coord),
            None => {
                debug!("Coordinate out of bounds");
                false
            }
        }
    }

    /// Places a marker at an already validated coordinate.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, marker: Marker, coord: Coord) -> bool {
        let cell = &mut self.grid[coord.row()][coord.col()];
        if !cell.is_empty() {
            debug!(occupant = ?cell.marker(), "Cell already occupied");
            return false;
        }
        *cell = Cell::Marked(marker);
        true
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Coordinates of the empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|coord| self.cell(*coord).is_empty())
            .collect()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell.marker() {
                    Some(marker) => write!(f, "{marker}")?,
                    None => write!(f, "{}", row * SIZE + col + 1)?,
                }
                if col < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
