//! Pure tic-tac-toe game logic.
//!
//! The engine is a set of deterministic functions over immutable
//! [`GameState`] snapshots. It holds no storage of its own: callers own the
//! snapshots and install each successor returned by [`make_move`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Player, available_moves, make_move, new_game, status};
//!
//! let game = new_game(None);
//! let game = make_move(&game, 4, Player::X)?;
//! assert_eq!(status(&game), "O's turn");
//! assert_eq!(available_moves(&game).len(), 8);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Phase, Player, Square};

/// Starts a game with an empty board. `None` means X moves first.
pub fn new_game(starting_player: Option<Player>) -> GameState {
    GameState::new(starting_player.unwrap_or_default())
}

/// Validates and applies a move, returning the successor snapshot.
///
/// See [`GameState::make_move`] for the failure modes.
pub fn make_move(state: &GameState, index: usize, marker: Player) -> Result<GameState, MoveError> {
    state.make_move(index, marker)
}

/// Indices of unoccupied cells in ascending order.
pub fn available_moves(state: &GameState) -> Vec<usize> {
    state.available_moves()
}

/// `"{marker}'s turn"`, `"{marker} wins"` or `"Draw"`.
pub fn status(state: &GameState) -> String {
    state.status()
}
