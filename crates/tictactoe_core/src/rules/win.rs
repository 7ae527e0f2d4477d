//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Line, Marker};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds a line held entirely by `marker`.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// complete one is returned.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker) -> Option<Line> {
    Line::iter().find(|line| {
        line.coords()
            .iter()
            .all(|coord| board.cell(*coord) == Cell::Marked(marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Marker::X), None);
        assert_eq!(winning_line(&board, Marker::O), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in Line::iter() {
            let mut board = Board::new();
            for coord in line.coords() {
                board.place_at(Marker::O, coord);
            }
            assert_eq!(winning_line(&board, Marker::O), Some(line));
            assert_eq!(winning_line(&board, Marker::X), None);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(Marker::X, 0, 0);
        board.place(Marker::X, 0, 1);
        board.place(Marker::O, 0, 2);
        assert_eq!(winning_line(&board, Marker::X), None);
    }

    #[test]
    fn test_anti_diagonal() {
        let mut board = Board::new();
        board.place(Marker::X, 0, 2);
        board.place(Marker::X, 1, 1);
        board.place(Marker::X, 2, 0);
        assert_eq!(winning_line(&board, Marker::X), Some(Line::AntiDiagonal));
    }
}
