//! Tests driving the console with scripted input.

use std::io::Cursor;
use tictactoe::{Console, ConsoleCommand, Flow};
use tictactoe_core::{GameSession, PlayerSlot};

fn run_script(script: &str) -> (GameSession, String) {
    let mut console = Console::new(
        GameSession::new("Ann", "Bo"),
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    console.run().expect("in-memory I/O");
    let session = console.session().clone();
    let output = String::from_utf8(console.into_output()).expect("utf-8 output");
    (session, output)
}

#[test]
fn test_scripted_win() {
    let (session, output) = run_script("0 0\n1 1\n0 1\n2 2\n0 2\nquit\n");
    assert!(output.contains("Ann wins with row 0!"));
    assert!(output.contains("Round over. Type `new` for another round."));
    assert!(output.contains("Final score: Ann (X): 1  Bo (O): 0  ties: 0"));
    assert_eq!(session.scores(), (1, 0));
}

#[test]
fn test_illegal_move_is_reported_and_retried() {
    let (session, output) = run_script("5\n5\n1,1\n");
    assert!(output.contains("Illegal move: (1, 1) is already taken. Try again."));
    assert_eq!(session.round().history().len(), 1);
    assert_eq!(
        session.current_player().map(|p| p.slot),
        Some(PlayerSlot::Second)
    );
}

#[test]
fn test_bad_input_keeps_going() {
    let (session, output) = run_script("hello\n\n1\n");
    assert!(output.contains("unrecognized input: hello"));
    assert!(output.contains("nothing entered"));
    assert_eq!(session.round().history().len(), 1);
}

#[test]
fn test_rename_and_new_round() {
    let (session, output) = run_script("rename 2 Cy\n1\n2\nnew\nscores\n");
    assert!(output.contains("Player 2 is now Cy."));
    assert!(output.contains("Ann (X): 0  Cy (O): 0  ties: 0"));
    assert!(session.round().history().is_empty());
    assert_eq!(
        session.current_player().map(|p| p.slot),
        Some(PlayerSlot::First)
    );
}

#[test]
fn test_quit_flow() {
    let mut console = Console::new(GameSession::default(), Cursor::new(String::new()), Vec::new());
    assert_eq!(console.apply(ConsoleCommand::Quit).unwrap(), Flow::Quit);
    assert_eq!(console.apply(ConsoleCommand::Help).unwrap(), Flow::Continue);
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Commands:"));
}
