//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::state::GameState;
use super::{Position, Square};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No winner and no draw yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a finished game.
    pub fn check(_mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index names one of the nine cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Rejects indices outside 0-8.
    pub fn check(mov: &Move, _game: &GameState) -> Result<(), MoveError> {
        match Position::from_index(mov.index) {
            Some(_) => Ok(()),
            None => Err(MoveError::InvalidIndex(mov.index)),
        }
    }
}

/// Precondition: The square at the move's index must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        match game.board().get(mov.index) {
            Some(Square::Empty) => Ok(()),
            Some(Square::Occupied(_)) => Err(MoveError::CellOccupied(mov.index)),
            None => Err(MoveError::InvalidIndex(mov.index)),
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a marker that is not the player to move.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.current_player() {
            Err(MoveError::WrongTurn {
                expected: game.current_player(),
                got: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in order: game not over, index in range,
/// cell empty, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(mov, game)?;
        IndexInRange::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - No occupied square changed
/// - Exactly one square was filled
/// - The turn passed to the other player
/// - All state invariants hold on the successor
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut failures = Vec::new();

        let monotonic = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .all(|(b, a)| *b == Square::Empty || b == a);
        if !monotonic {
            failures.push("occupied squares never change".to_string());
        }

        if after.board().occupied() != before.board().occupied() + 1 {
            failures.push("each move fills exactly one square".to_string());
        }

        if after.current_player() != before.current_player().opponent() {
            failures.push("turn alternates after every move".to_string());
        }

        if let Err(violations) = TicTacToeInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                failures.join("; ")
            )))
        }
    }
}
