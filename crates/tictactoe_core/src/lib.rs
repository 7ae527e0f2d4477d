//! Two-player tic-tac-toe rounds.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid; marks cells and resets
//! - **RuleEngine**: stateless win and tie detection for one marker
//! - **RoundController**: turn order, round state and scoring
//! - **GameSession**: the interface a presentation layer drives
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, MoveStatus};
//!
//! let mut session = GameSession::new("Ann", "Bo");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     assert_eq!(session.submit_move(row, col).status, MoveStatus::Ongoing);
//! }
//! let report = session.submit_move(0, 2);
//! assert_eq!(report.status, MoveStatus::Win);
//! assert_eq!(session.scores(), (1, 0));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
pub mod invariants;
mod player;
mod round;
pub mod rules;
mod session;
mod types;

pub use board::Board;
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RoundInvariants};
pub use player::{Player, PlayerRef, PlayerSlot};
pub use round::{
    IllegalMove, Move, MoveOutcome, RoundController, RoundOutcome, RoundResult, RoundState,
};
pub use rules::{Evaluation, RuleEngine};
pub use session::{BoardSnapshot, CellView, GameSession, MoveReport, MoveStatus, Scores};
pub use types::{CELLS, Cell, Coord, Line, Marker, SIZE};
