//! A match between two players, as seen by a presentation layer.
//!
//! The presentation layer submits moves and round resets, then polls
//! [`GameSession::board_snapshot`] and [`GameSession::scores`] to redraw.
//! Every value handed out here is serializable.

use crate::player::{Player, PlayerRef, PlayerSlot};
use crate::round::{IllegalMove, MoveOutcome, RoundController, RoundOutcome};
use crate::types::{Cell, Line, Marker, SIZE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Status of a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MoveStatus {
    /// Refused; nothing changed.
    Illegal,
    /// Placed; the other player is up.
    Ongoing,
    /// Placed and won the round.
    Win,
    /// Placed and filled the board.
    Tie,
}

/// Report for one submitted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MoveReport {
    /// What happened.
    pub status: MoveStatus,
    /// Winner, only for [`MoveStatus::Win`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerRef>,
    /// Completed line, only for [`MoveStatus::Win`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    /// Why the move was refused, only for [`MoveStatus::Illegal`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<IllegalMove>,
}

impl MoveReport {
    fn status_only(status: MoveStatus) -> Self {
        Self {
            status,
            winner: None,
            line: None,
            reason: None,
        }
    }

    /// Checks if the move was refused.
    pub fn is_illegal(&self) -> bool {
        self.status == MoveStatus::Illegal
    }
}

/// How a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum CellView {
    /// No marker.
    #[serde(rename = "empty")]
    Empty,
    /// First player's marker.
    X,
    /// Second player's marker.
    O,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => CellView::Empty,
            Cell::Marked(Marker::X) => CellView::X,
            Cell::Marked(Marker::O) => CellView::O,
        }
    }
}

/// Copy of the grid for rendering, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct BoardSnapshot {
    /// Cells by row.
    pub cells: [[CellView; SIZE]; SIZE],
}

impl BoardSnapshot {
    /// Cell at (row, col), `None` off the board.
    pub fn at(&self, row: usize, col: usize) -> Option<CellView> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }
}

/// Rounds won by each player, and rounds tied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Scores {
    /// Wins of the first player.
    pub first: u32,
    /// Wins of the second player.
    pub second: u32,
    /// Tied rounds.
    pub ties: u32,
}

/// One match: two players, their scores, and the round being played.
///
/// Sessions are plain values. Several can exist side by side and none of
/// them share state.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    round: RoundController,
}

impl GameSession {
    /// Creates a session. Blank names fall back to "Player 1" / "Player 2".
    #[instrument]
    pub fn new(first_name: &str, second_name: &str) -> Self {
        info!("Creating game session");
        Self {
            round: RoundController::new(first_name, second_name),
        }
    }

    /// Submits a move at (row, col) for the player whose turn it is.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: i64, col: i64) -> MoveReport {
        match self.round.submit_move(row, col) {
            MoveOutcome::Illegal(reason) => MoveReport {
                reason: Some(reason),
                ..MoveReport::status_only(MoveStatus::Illegal)
            },
            MoveOutcome::Ongoing => MoveReport::status_only(MoveStatus::Ongoing),
            MoveOutcome::Win { winner, line } => MoveReport {
                winner: Some(self.round.player(winner).to_ref()),
                line: Some(line),
                ..MoveReport::status_only(MoveStatus::Win)
            },
            MoveOutcome::Tie => MoveReport::status_only(MoveStatus::Tie),
        }
    }

    /// Copy of the board for rendering.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        let grid = *self.round.board().get();
        BoardSnapshot {
            cells: grid.map(|row| row.map(CellView::from)),
        }
    }

    /// Player to move, or `None` once the round has ended.
    pub fn current_player(&self) -> Option<PlayerRef> {
        self.round
            .current_player()
            .map(|slot| self.round.player(slot).to_ref())
    }

    /// Wins of (first, second).
    pub fn scores(&self) -> (u32, u32) {
        (
            self.round.player(PlayerSlot::First).wins(),
            self.round.player(PlayerSlot::Second).wins(),
        )
    }

    /// Wins of both players plus tied rounds.
    pub fn score_card(&self) -> Scores {
        let (first, second) = self.scores();
        Scores {
            first,
            second,
            ties: self.round.ties(),
        }
    }

    /// Clears the board for the next round; the first player opens.
    pub fn start_new_round(&mut self) {
        self.round.start_new_round();
    }

    /// Clears the board and all scores. Names are kept.
    pub fn new_match(&mut self) {
        self.round.new_match();
    }

    /// Renames a player. A blank name restores the default.
    pub fn rename_player(&mut self, slot: PlayerSlot, name: &str) {
        self.round.rename_player(slot, name);
    }

    /// Player in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        self.round.player(slot)
    }

    /// Both players, first then second.
    pub fn players(&self) -> &[Player; 2] {
        self.round.players()
    }

    /// Outcome of the latest legal move this round.
    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.round.last_outcome()
    }

    /// The underlying round controller.
    pub fn round(&self) -> &RoundController {
        &self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_moves() {
        let mut session = GameSession::default();
        session.submit_move(0, 0);
        session.submit_move(2, 1);
        let snapshot = session.board_snapshot();
        assert_eq!(snapshot.at(0, 0), Some(CellView::X));
        assert_eq!(snapshot.at(2, 1), Some(CellView::O));
        assert_eq!(snapshot.at(1, 1), Some(CellView::Empty));
        assert_eq!(snapshot.at(3, 0), None);
    }

    #[test]
    fn test_win_report_names_winner() {
        let mut session = GameSession::new("Ann", "Bo");
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
            assert_eq!(session.submit_move(row, col).status, MoveStatus::Ongoing);
        }
        let report = session.submit_move(0, 2);
        assert_eq!(report.status, MoveStatus::Win);
        let winner = report.winner.expect("winner");
        assert_eq!(winner.name, "Ann");
        assert_eq!(winner.marker, Marker::X);
        assert_eq!(report.line, Some(Line::Row0));
        assert_eq!(session.scores(), (1, 0));
        assert!(session.current_player().is_none());
    }

    #[test]
    fn test_rename_shows_in_current_player() {
        let mut session = GameSession::default();
        assert_eq!(session.current_player().map(|p| p.name), Some("Player 1".to_string()));
        session.rename_player(PlayerSlot::First, "Ann");
        assert_eq!(session.current_player().map(|p| p.name), Some("Ann".to_string()));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = GameSession::default();
        let b = GameSession::default();
        a.submit_move(1, 1);
        assert_eq!(b.board_snapshot().at(1, 1), Some(CellView::Empty));
        assert_eq!(a.board_snapshot().at(1, 1), Some(CellView::X));
    }
}
