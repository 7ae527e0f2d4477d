//! Text rendering of session state.

use tictactoe_core::{BoardSnapshot, CellView, GameSession, MoveReport, MoveStatus, SIZE};

/// Draws the board; empty cells show their keypad number.
pub fn board(snapshot: &BoardSnapshot) -> String {
    snapshot
        .cells
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    CellView::Empty => (row * SIZE + col + 1).to_string(),
                    CellView::X => "X".to_string(),
                    CellView::O => "O".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n--+---+--\n")
}

/// One line per player with wins, then ties.
pub fn scores(session: &GameSession) -> String {
    let card = session.score_card();
    let [first, second] = session.players();
    format!(
        "{} (X): {}  {} (O): {}  ties: {}",
        first.name(),
        card.first,
        second.name(),
        card.second,
        card.ties
    )
}

/// Message for a move report.
pub fn report(report: &MoveReport) -> String {
    match report.status {
        MoveStatus::Illegal => match &report.reason {
            Some(reason) => format!("Illegal move: {reason}. Try again."),
            None => "Illegal move. Try again.".to_string(),
        },
        MoveStatus::Ongoing => String::new(),
        MoveStatus::Win => match (&report.winner, report.line) {
            (Some(winner), Some(line)) => format!("{} wins with {}!", winner.name, line),
            (Some(winner), None) => format!("{} wins!", winner.name),
            _ => "Round won!".to_string(),
        },
        MoveStatus::Tie => "It's a tie!".to_string(),
    }
}

/// Whose turn it is, or how to continue once the round is over.
pub fn prompt(session: &GameSession) -> String {
    match session.current_player() {
        Some(player) => format!("{} ({}) to move", player.name, player.marker),
        None => "Round over. Type `new` for another round.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_hints() {
        let mut session = GameSession::default();
        session.submit_move(1, 1);
        assert_eq!(
            board(&session.board_snapshot()),
            "1 | 2 | 3\n--+---+--\n4 | X | 6\n--+---+--\n7 | 8 | 9"
        );
    }

    #[test]
    fn test_prompt_and_scores() {
        let session = GameSession::new("Ann", "Bo");
        assert_eq!(prompt(&session), "Ann (X) to move");
        assert_eq!(scores(&session), "Ann (X): 0  Bo (O): 0  ties: 0");
    }

    #[test]
    fn test_illegal_report_gives_reason() {
        let mut session = GameSession::default();
        let message = report(&session.submit_move(4, 0));
        assert_eq!(message, "Illegal move: (4, 0) is off the board. Try again.");
    }
}
