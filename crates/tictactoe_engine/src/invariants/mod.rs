//! First-class invariants for tic-tac-toe snapshots.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`](super::GameState). The move contract checks them on each
//! successor in debug builds.

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
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
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

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod balanced_marks;
pub mod consistent_outcome;
pub mod turn_order;

pub use balanced_marks::BalancedMarksInvariant;
pub use consistent_outcome::ConsistentOutcomeInvariant;
pub use turn_order::TurnOrderInvariant;

/// All tic-tac-toe snapshot invariants as a composable set.
pub type TicTacToeInvariants = (
    BalancedMarksInvariant,
    ConsistentOutcomeInvariant,
    TurnOrderInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameState, Move, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&GameState::new(Player::O)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = GameState::replay(
            Player::X,
            &[
                Move::new(Player::X, 0),
                Move::new(Player::O, 4),
                Move::new(Player::X, 2),
            ],
        )
        .unwrap();
        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X);
        board.place(Position::TopCenter, Player::X);
        // Two X marks, no O, X to move, claimed draw.
        let game = GameState::from_parts(board, Player::X, None, true);

        let violations = TicTacToeInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BalancedMarksInvariant, TurnOrderInvariant);
        assert!(TwoInvariants::check_all(&GameState::new(Player::X)).is_ok());
    }
}
