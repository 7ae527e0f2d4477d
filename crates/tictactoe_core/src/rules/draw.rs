//! Tie detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board is a tie only when the mover has no winning line, which
/// [`RuleEngine::evaluate`](super::RuleEngine::evaluate) checks first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.get().iter().flatten().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Marker};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Marker::X, 1, 1);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.place_at(Marker::X, coord);
        }
        assert!(is_full(&board));
    }
}
