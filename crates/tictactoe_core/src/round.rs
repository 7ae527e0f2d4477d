//! Turn sequencing and scoring across rounds.
//!
//! [`RoundController`] is a two-state machine:
//!
//! - `AwaitingMove(slot)`: `slot` may submit a move. A legal move is placed,
//!   evaluated for the mover's marker, and either ends the round or hands the
//!   turn to the other player. An illegal move changes nothing.
//! - `RoundEnded(result)`: moves are rejected until
//!   [`RoundController::start_new_round`] clears the board and gives the
//!   first move back to the first player.

use crate::board::Board;
use crate::player::{Player, PlayerSlot};
use crate::rules::RuleEngine;
use crate::types::{Coord, Line, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_new::new)]
pub struct Move {
    /// Player who moved.
    pub slot: PlayerSlot,
    /// Marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.coord)
    }
}

/// Why a move was refused.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    schemars::JsonSchema,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum IllegalMove {
    /// Coordinates outside the 3x3 grid.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
    /// The cell already holds a marker.
    #[display("{_0} is already taken")]
    Occupied(Coord),
    /// The round has ended; start a new one first.
    #[display("the round is over")]
    RoundOver,
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// `winner` completed `line`.
    Win {
        /// Winning seat.
        winner: PlayerSlot,
        /// First complete line found.
        line: Line,
    },
    /// Board filled with no line.
    Tie,
}

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for this seat to move.
    AwaitingMove(PlayerSlot),
    /// Round over.
    RoundEnded(RoundResult),
}

/// Result of the most recent legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round continues.
    Ongoing,
    /// The mover won.
    Win(PlayerSlot),
    /// Board filled with no winner.
    Tie,
}

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Refused; nothing changed.
    Illegal(IllegalMove),
    /// Placed; the other player is up.
    Ongoing,
    /// Placed and won the round.
    Win {
        /// Winning seat.
        winner: PlayerSlot,
        /// Completed line.
        line: Line,
    },
    /// Placed and filled the board.
    Tie,
}

impl MoveOutcome {
    /// Outcome of a legal move, `None` for an illegal one.
    pub fn round_outcome(self) -> Option<RoundOutcome> {
        match self {
            MoveOutcome::Illegal(_) => None,
            MoveOutcome::Ongoing => Some(RoundOutcome::Ongoing),
            MoveOutcome::Win { winner, .. } => Some(RoundOutcome::Win(winner)),
            MoveOutcome::Tie => Some(RoundOutcome::Tie),
        }
    }
}

/// Runs rounds between two players and keeps score.
#[derive(Debug, Clone)]
pub struct RoundController {
    board: Board,
    players: [Player; 2],
    state: RoundState,
    history: Vec<Move>,
    last_outcome: Option<RoundOutcome>,
    rounds_played: u32,
    ties: u32,
}

impl RoundController {
    /// Creates a controller with the first player to move.
    #[instrument]
    pub fn new(first_name: &str, second_name: &str) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(PlayerSlot::First, first_name),
                Player::new(PlayerSlot::Second, second_name),
            ],
            state: RoundState::AwaitingMove(PlayerSlot::First),
            history: Vec::new(),
            last_outcome: None,
            rounds_played: 0,
            ties: 0,
        }
    }

    /// Submits a move at (row, col) for the player whose turn it is.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn submit_move(&mut self, row: i64, col: i64) -> MoveOutcome {
        let active = match self.state {
            RoundState::AwaitingMove(slot) => slot,
            RoundState::RoundEnded(_) => {
                warn!("Move submitted after the round ended");
                return MoveOutcome::Illegal(IllegalMove::RoundOver);
            }
        };

        let Some(coord) = Coord::new(row, col) else {
            warn!(row, col, "Move off the board");
            return MoveOutcome::Illegal(IllegalMove::OutOfBounds { row, col });
        };

        let marker = active.marker();
        if !self.board.place_at(marker, coord) {
            warn!(%coord, "Move onto an occupied cell");
            return MoveOutcome::Illegal(IllegalMove::Occupied(coord));
        }
        self.history.push(Move::new(active, marker, coord));

        let evaluation = RuleEngine::evaluate(&self.board, marker);
        let outcome = match evaluation.line() {
            Some(line) => {
                self.player_mut(active).record_win();
                self.end_round(RoundResult::Win {
                    winner: active,
                    line,
                });
                MoveOutcome::Win {
                    winner: active,
                    line,
                }
            }
            None if evaluation.tied() => {
                self.ties += 1;
                self.end_round(RoundResult::Tie);
                MoveOutcome::Tie
            }
            None => {
                self.state = RoundState::AwaitingMove(active.other());
                debug!(next = ?active.other(), "Turn passed");
                MoveOutcome::Ongoing
            }
        };
        self.last_outcome = outcome.round_outcome();

        debug_assert!(
            self.check_invariants().is_ok(),
            "Round invariants violated after {:?}",
            self.history.last()
        );

        outcome
    }

    /// Clears the board and gives the first move to the first player.
    ///
    /// Scores are kept. Calling this mid-round abandons the round without
    /// scoring it.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn start_new_round(&mut self) {
        if matches!(self.state, RoundState::AwaitingMove(_)) && !self.history.is_empty() {
            debug!(moves = self.history.len(), "Abandoning round in progress");
        }
        self.board.reset();
        self.history.clear();
        self.last_outcome = None;
        self.state = RoundState::AwaitingMove(PlayerSlot::First);
    }

    /// Starts the match over: new round, scores cleared, names kept.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.start_new_round();
        for player in &mut self.players {
            player.clear_wins();
        }
        self.rounds_played = 0;
        self.ties = 0;
        info!("New match started");
    }

    /// Renames the player in `slot`. A blank name restores the default.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, slot: PlayerSlot, name: &str) {
        self.player_mut(slot).rename(name);
    }

    /// Current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Seat to move, or `None` while the round is over.
    pub fn current_player(&self) -> Option<PlayerSlot> {
        match self.state {
            RoundState::AwaitingMove(slot) => Some(slot),
            RoundState::RoundEnded(_) => None,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player in `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot_index(slot)]
    }

    /// Both players, first then second.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Moves applied this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Outcome of the latest legal move this round.
    pub fn last_outcome(&self) -> Option<RoundOutcome> {
        self.last_outcome
    }

    /// Rounds finished this match.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Rounds tied this match.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot_index(slot)]
    }

    fn end_round(&mut self, result: RoundResult) {
        self.rounds_played += 1;
        self.state = RoundState::RoundEnded(result);
        info!(?result, rounds_played = self.rounds_played, "Round ended");
    }
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new("", "")
    }
}

fn slot_index(slot: PlayerSlot) -> usize {
    match slot {
        PlayerSlot::First => 0,
        PlayerSlot::Second => 1,
    }
}
