//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Marker a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker of the first player.
    #[strum(to_string = "X")]
    X,
    /// Marker of the second player.
    #[strum(to_string = "O")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Symbol drawn for this marker.
    pub fn symbol(self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a marker.
    Marked(Marker),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }
}

/// A validated (row, column) address, both 0-indexed.
///
/// The only way to build a `Coord` from caller input is [`Coord::new`], so any
/// `Coord` in hand is within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, schemars::JsonSchema)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; CELLS] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, or `None` when either component is out of range.
    #[instrument]
    pub fn new(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < SIZE)?;
        Some(Self::at(row, col))
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Row, 0-indexed.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, 0-indexed.
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight lines that win the round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
    strum::Display,
    strum::EnumIter,
)]
pub enum Line {
    /// Top row.
    #[strum(to_string = "row 0")]
    #[serde(rename = "row 0")]
    Row0,
    /// Middle row.
    #[strum(to_string = "row 1")]
    #[serde(rename = "row 1")]
    Row1,
    /// Bottom row.
    #[strum(to_string = "row 2")]
    #[serde(rename = "row 2")]
    Row2,
    /// Left column.
    #[strum(to_string = "column 0")]
    #[serde(rename = "column 0")]
    Col0,
    /// Middle column.
    #[strum(to_string = "column 1")]
    #[serde(rename = "column 1")]
    Col1,
    /// Right column.
    #[strum(to_string = "column 2")]
    #[serde(rename = "column 2")]
    Col2,
    /// Top-left to bottom-right.
    #[strum(to_string = "main diagonal")]
    #[serde(rename = "main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti diagonal")]
    #[serde(rename = "anti diagonal")]
    AntiDiagonal,
}

impl Line {
    /// The three cells making up this line.
    pub fn coords(self) -> [Coord; SIZE] {
        match self {
            Line::Row0 => [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
            Line::Row1 => [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
            Line::Row2 => [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
            Line::Col0 => [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
            Line::Col1 => [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
            Line::Col2 => [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
            Line::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }
}
