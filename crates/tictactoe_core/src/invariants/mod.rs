//! Properties every round must satisfy after each applied move.
//!
//! The controller checks these in debug builds; tests check them directly.

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

use crate::round::RoundController;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        finish(violations)
    }
}

/// All round invariants.
pub type RoundInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

impl RoundController {
    /// Checks all round invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        RoundInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_hold_for_fresh_round() {
        let round = RoundController::default();
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariants_hold_through_a_round() {
        let mut round = RoundController::default();
        for (row, col) in [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1)] {
            round.submit_move(row, col);
            assert!(round.check_invariants().is_ok());
        }
        round.start_new_round();
        assert!(round.check_invariants().is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let round = RoundController::default();
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&round).is_ok());
    }
}
