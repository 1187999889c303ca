//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's intent
//! and are validated against a snapshot before a successor is produced.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a board index.
///
/// The index is the raw 0-8 cell number as submitted; range checking
/// happens when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The board index where the player places their mark.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the board index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The marker does not match the player to move.
    #[display("It's {}'s turn, not {}'s", expected, got)]
    WrongTurn {
        /// The player whose turn it is.
        expected: Player,
        /// The marker that was submitted.
        got: Player,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::InvalidIndex(_) => "invalid_index",
            MoveError::CellOccupied(_) => "cell_occupied",
            MoveError::GameOver => "game_over",
            MoveError::WrongTurn { .. } => "wrong_turn",
            MoveError::InvariantViolation(_) => "invariant_violation",
        }
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::InvalidIndex(99).to_string(),
            "Index 99 is out of range (must be 0-8)"
        );
        assert_eq!(
            MoveError::WrongTurn {
                expected: Player::X,
                got: Player::O
            }
            .to_string(),
            "It's X's turn, not O's"
        );
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Player::O, 4).to_string(), "O -> 4");
    }
}
