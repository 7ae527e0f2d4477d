//! Alternating turn invariant: first, second, first, ...

use super::Invariant;
use crate::player::PlayerSlot;
use crate::round::{RoundController, RoundState};

/// Invariant: the first player opens, no seat moves twice in a row, and the
/// seat awaiting a move is the one the history length implies.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundController> for AlternatingTurnInvariant {
    fn holds(round: &RoundController) -> bool {
        let history = round.history();

        if history
            .first()
            .is_some_and(|mov| mov.slot != PlayerSlot::First)
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].slot == pair[1].slot) {
            return false;
        }

        match round.state() {
            RoundState::AwaitingMove(slot) => {
                let expected = if history.len() % 2 == 0 {
                    PlayerSlot::First
                } else {
                    PlayerSlot::Second
                };
                slot == expected
            }
            RoundState::RoundEnded(_) => !history.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns, first player opening"
    }
}
