//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::Board;
use crate::round::RoundController;

/// Invariant: replaying the history on an empty board reproduces the board,
/// and no move landed on a marked cell.
pub struct MonotonicBoardInvariant;

impl Invariant<RoundController> for MonotonicBoardInvariant {
    fn holds(round: &RoundController) -> bool {
        let mut reconstructed = Board::new();
        for mov in round.history() {
            if !reconstructed.place_at(mov.marker, mov.coord) {
                return false;
            }
        }
        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
