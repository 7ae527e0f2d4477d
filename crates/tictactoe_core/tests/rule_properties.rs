//! Property tests for the board, the rule engine and round sequencing.

use proptest::prelude::*;
use strum::IntoEnumIterator;
use tictactoe_core::{
    Board, Cell, Coord, GameSession, Line, Marker, MoveStatus, RoundController, RuleEngine,
};

fn marker_strategy() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::X), Just(Marker::O)]
}

/// Arbitrary grid contents, not necessarily reachable in play.
fn board_strategy() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0u8..3, 9).prop_map(|cells| {
        let mut board = Board::new();
        for (coord, cell) in Coord::ALL.iter().zip(cells) {
            match cell {
                1 => {
                    board.place_at(Marker::X, *coord);
                }
                2 => {
                    board.place_at(Marker::O, *coord);
                }
                _ => {}
            }
        }
        board
    })
}

fn has_line(board: &Board, marker: Marker) -> bool {
    Line::iter().any(|line| {
        line.coords()
            .iter()
            .all(|coord| board.cell(*coord) == Cell::Marked(marker))
    })
}

fn is_full(board: &Board) -> bool {
    Coord::ALL.iter().all(|coord| !board.cell(*coord).is_empty())
}

proptest! {
    #[test]
    fn place_marks_empty_and_rejects_occupied(
        board in board_strategy(),
        marker in marker_strategy(),
        index in 0usize..9,
    ) {
        let coord = Coord::from_index(index).unwrap();
        let mut after = board.clone();
        let placed = after.place(marker, coord.row() as i64, coord.col() as i64);

        if board.cell(coord).is_empty() {
            prop_assert!(placed);
            prop_assert_eq!(after.cell(coord), Cell::Marked(marker));
        } else {
            prop_assert!(!placed);
            prop_assert_eq!(after, board);
        }
    }

    #[test]
    fn out_of_bounds_never_changes_board(
        board in board_strategy(),
        row in -10i64..10,
        col in -10i64..10,
    ) {
        prop_assume!(!(0..3).contains(&row) || !(0..3).contains(&col));
        let mut after = board.clone();
        prop_assert!(!after.place(Marker::X, row, col));
        prop_assert_eq!(after, board);
    }

    #[test]
    fn reset_always_empties(board in board_strategy()) {
        let mut board = board;
        board.reset();
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn evaluate_is_pure(board in board_strategy(), marker in marker_strategy()) {
        let first = RuleEngine::evaluate(&board, marker);
        let second = RuleEngine::evaluate(&board, marker);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn evaluate_matches_line_and_fill_checks(
        board in board_strategy(),
        marker in marker_strategy(),
    ) {
        let eval = RuleEngine::evaluate(&board, marker);
        prop_assert_eq!(eval.won(), has_line(&board, marker));
        prop_assert_eq!(eval.line().is_some(), eval.won());
        prop_assert_eq!(eval.tied(), !eval.won() && is_full(&board));
        prop_assert!(!(eval.won() && eval.tied()));
    }

    #[test]
    fn completed_line_wins_for_its_marker(
        marker in marker_strategy(),
        line_index in 0usize..8,
    ) {
        let line = Line::iter().nth(line_index).unwrap();
        let mut board = Board::new();
        for coord in line.coords() {
            board.place_at(marker, coord);
        }
        prop_assert!(RuleEngine::evaluate(&board, marker).won());
        prop_assert!(!RuleEngine::evaluate(&board, marker.opponent()).won());
    }

    #[test]
    fn random_games_keep_invariants(order in Just(Coord::ALL.to_vec()).prop_shuffle()) {
        let mut round = RoundController::default();
        for coord in order {
            let before = round.current_player();
            let outcome = round.submit_move(coord.row() as i64, coord.col() as i64);
            prop_assert!(round.check_invariants().is_ok());
            if before.is_none() {
                break;
            }
            if round.current_player().is_some() {
                prop_assert_eq!(round.current_player(), before.map(|slot| slot.other()));
            }
            prop_assert!(outcome.round_outcome().is_some());
        }
    }

    #[test]
    fn illegal_moves_change_nothing(
        order in Just(Coord::ALL.to_vec()).prop_shuffle(),
        moves in 1usize..5,
        repeat in 0usize..4,
    ) {
        let mut session = GameSession::default();
        for coord in order.iter().take(moves) {
            session.submit_move(coord.row() as i64, coord.col() as i64);
        }
        prop_assume!(session.current_player().is_some());

        let target = order[repeat.min(moves - 1)];
        let snapshot = session.board_snapshot();
        let current = session.current_player();
        let report = session.submit_move(target.row() as i64, target.col() as i64);

        prop_assert_eq!(report.status, MoveStatus::Illegal);
        prop_assert_eq!(session.board_snapshot(), snapshot);
        prop_assert_eq!(session.current_player(), current);
    }
}
