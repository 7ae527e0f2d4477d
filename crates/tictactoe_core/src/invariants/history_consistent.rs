//! History consistency invariant: the history accounts for every marked cell.

use super::Invariant;
use crate::round::RoundController;

/// Invariant: one history entry per marked cell, each carrying its seat's
/// marker.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundController> for HistoryConsistentInvariant {
    fn holds(round: &RoundController) -> bool {
        let marked = round
            .board()
            .get()
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count();

        marked == round.history().len()
            && round
                .history()
                .iter()
                .all(|mov| mov.marker == mov.slot.marker())
    }

    fn description() -> &'static str {
        "History matches the marked cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_win() {
        let mut round = RoundController::default();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            round.submit_move(row, col);
        }
        assert!(HistoryConsistentInvariant::holds(&round));
        assert_eq!(round.history().len(), 5);
    }
}
