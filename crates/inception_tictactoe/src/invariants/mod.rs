//! First-class invariants for inception tic-tac-toe.
//!
//! Invariants are logical properties that must hold between moves. They are
//! testable independently and double as documentation of the game's
//! guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
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
        collect(violations)
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
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod status_derived;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use status_derived::StatusDerivedInvariant;

/// Invariants cheap enough to check after every move.
pub type PlayInvariants = (StatusDerivedInvariant, AlternatingTurnInvariant);

/// All meta-board invariants as a composable set.
pub type MetaBoardInvariants = (
    StatusDerivedInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetaBoard;

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = MetaBoard::new();
        assert!(MetaBoardInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = MetaBoard::new();
        game.play_at(1, 1, 1, 1).unwrap();
        game.play_at(1, 1, 0, 0).unwrap();
        game.play_at(0, 2, 2, 0).unwrap();
        assert!(MetaBoardInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = MetaBoard::new();
        game.play_at(0, 0, 0, 0).unwrap();
        // Hand the turn back to X without a move.
        game.turn = game.turn.opponent();
        game.history.push(game.history[0]);

        let violations = MetaBoardInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == AlternatingTurnInvariant::description())
        );
        assert!(
            violations
                .iter()
                .any(|v| v.description == HistoryConsistentInvariant::description())
        );
    }
}
