//! Game rules for tic-tac-toe.
//!
//! Rules are pure functions of a board snapshot and the marker that just
//! moved. Nothing here holds state, so an evaluation can never see a result
//! left over from an earlier round.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::board::Board;
use crate::types::{Line, Marker};
use tracing::{debug, instrument};

/// Result of evaluating a board for one marker.
///
/// `won` and `tied` are never both set: a full board with a winning line is
/// a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    won: bool,
    tied: bool,
    line: Option<Line>,
}

impl Evaluation {
    /// Neither won nor tied.
    pub fn ongoing() -> Self {
        Self {
            won: false,
            tied: false,
            line: None,
        }
    }

    /// Whether the marker holds a complete line.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Whether the board is full with no winning line.
    pub fn tied(&self) -> bool {
        self.tied
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        self.line
    }

    /// Checks if the round is over.
    pub fn is_terminal(&self) -> bool {
        self.won || self.tied
    }
}

/// Decides win and tie for a single marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Evaluates `board` for `marker`.
    ///
    /// Checks all eight lines for three `marker` cells. Only when none is
    /// found is the board checked for a tie.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, marker: Marker) -> Evaluation {
        if let Some(line) = winning_line(board, marker) {
            debug!(%line, "Winning line");
            return Evaluation {
                won: true,
                tied: false,
                line: Some(line),
            };
        }

        if is_full(board) {
            debug!("Board full without a winning line");
            return Evaluation {
                won: false,
                tied: true,
                line: None,
            };
        }

        Evaluation::ongoing()
    }
}
