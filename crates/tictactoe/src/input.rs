//! Parsing of console input lines.

use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_core::{CELLS, Coord, PlayerSlot};

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place a marker at (row, col). Not range-checked; the game decides.
    Move {
        /// Row, 0-indexed.
        row: i64,
        /// Column, 0-indexed.
        col: i64,
    },
    /// Start the next round.
    NewRound,
    /// Start a new match, clearing scores.
    NewMatch,
    /// Rename a player.
    Rename {
        /// Which player.
        slot: PlayerSlot,
        /// New name; blank restores the default.
        name: String,
    },
    /// Print the scores.
    Scores,
    /// Print the board.
    Board,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseCommandError {
    /// Blank line.
    #[display("nothing entered")]
    Empty,
    /// Not a command or a coordinate pair.
    #[display("unrecognized input: {_0}")]
    Unknown(#[error(not(source))] String),
    /// `rename` without 1 or 2.
    #[display("rename needs a player number, 1 or 2")]
    BadPlayer,
    /// Single number outside the keypad.
    #[display("cell number must be 1-9, got {_0}")]
    BadCell(#[error(not(source))] i64),
}

/// Help text listing the commands.
pub const HELP: &str = "\
Commands:
  <row> <col>       place your marker (0-indexed, also `row,col`)
  <1-9>             place your marker on the numbered cell
  new               start the next round
  match             start a new match (scores cleared)
  rename <1|2> <n>  rename a player
  scores            show the scores
  board             show the board
  help              show this help
  quit              leave";

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        match first.to_lowercase().as_str() {
            "new" => return Ok(ConsoleCommand::NewRound),
            "match" => return Ok(ConsoleCommand::NewMatch),
            "scores" => return Ok(ConsoleCommand::Scores),
            "board" => return Ok(ConsoleCommand::Board),
            "help" | "?" => return Ok(ConsoleCommand::Help),
            "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),
            "rename" => {
                let slot = words
                    .next()
                    .and_then(|n| n.parse::<u8>().ok())
                    .and_then(PlayerSlot::from_number)
                    .ok_or(ParseCommandError::BadPlayer)?;
                let name = words.collect::<Vec<_>>().join(" ");
                return Ok(ConsoleCommand::Rename { slot, name });
            }
            _ => {}
        }

        parse_move(line).ok_or_else(|| ParseCommandError::Unknown(line.to_string()))?
    }
}

/// Parses `row col`, `row,col` or a keypad number 1-9.
fn parse_move(line: &str) -> Option<Result<ConsoleCommand, ParseCommandError>> {
    let numbers = line
        .replace(',', " ")
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    match numbers.as_slice() {
        [cell] => Some(keypad(*cell)),
        [row, col] => Some(Ok(ConsoleCommand::Move {
            row: *row,
            col: *col,
        })),
        _ => None,
    }
}

fn keypad(cell: i64) -> Result<ConsoleCommand, ParseCommandError> {
    usize::try_from(cell)
        .ok()
        .filter(|n| (1..=CELLS).contains(n))
        .and_then(|n| Coord::from_index(n - 1))
        .map(|coord| ConsoleCommand::Move {
            row: coord.row() as i64,
            col: coord.col() as i64,
        })
        .ok_or(ParseCommandError::BadCell(cell))
}

/// Parses a `row,col` pair as given to `replay`.
pub fn parse_pair(text: &str) -> Result<(i64, i64), ParseCommandError> {
    let unknown = || ParseCommandError::Unknown(text.to_string());
    let (row, col) = text.split_once(',').ok_or_else(unknown)?;
    let row = row.trim().parse().map_err(|_| unknown())?;
    let col = col.trim().parse().map_err(|_| unknown())?;
    Ok((row, col))
}
