//! Immutable game snapshots and the state transition.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{check_winner, is_full};
use super::{Board, Phase, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state at one point in time.
///
/// A snapshot is never mutated in place: [`GameState::make_move`] returns a
/// successor and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move next.
    current_player: Player,
    /// Set once a line is completed.
    winner: Option<Player>,
    /// Board full without a line.
    is_draw: bool,
}

impl GameState {
    /// Creates a fresh game with `starting_player` to move.
    #[instrument]
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            winner: None,
            is_draw: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True when the board filled up without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Derived phase of the game.
    pub fn phase(&self) -> Phase {
        match (self.winner, self.is_draw) {
            (Some(player), _) => Phase::Won(player),
            (None, true) => Phase::Drawn,
            (None, false) => Phase::InProgress(self.current_player),
        }
    }

    /// Human-readable status, e.g. `"X's turn"`, `"O wins"` or `"Draw"`.
    pub fn status(&self) -> String {
        self.phase().to_string()
    }

    /// Indices of empty cells in ascending order.
    ///
    /// Reflects board occupancy only; a finished game still reports its
    /// empty cells.
    pub fn available_moves(&self) -> Vec<usize> {
        Position::valid_moves(&self.board)
            .into_iter()
            .map(Position::to_index)
            .collect()
    }

    /// Places `marker` at `index`, returning the successor snapshot.
    ///
    /// Fails without producing a successor when the game is over, the index
    /// is outside 0-8, the cell is taken, or it's not `marker`'s turn.
    #[instrument(skip(self), fields(to_move = %self.current_player))]
    pub fn make_move(&self, index: usize, marker: Player) -> Result<GameState, MoveError> {
        let action = Move::new(marker, index);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(%action, error = %e, "Move rejected");
            return Err(e);
        }

        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;

        let mut next = *self;
        next.board.place(pos, marker);
        next.current_player = marker.opponent();
        next.winner = check_winner(&next.board);
        next.is_draw = next.winner.is_none() && is_full(&next.board);

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%action, status = %next.status(), "Move applied");
        if next.is_over() {
            info!(outcome = %next.phase(), "Game finished");
        }

        Ok(next)
    }

    /// Replays moves from a fresh game, stopping at the first rejected move.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(starting_player: Player, moves: &[Move]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(starting_player), |state, action| {
                state.make_move(action.index, action.player)
            })
    }
}

#[cfg(test)]
impl GameState {
    /// Builds an arbitrary, possibly inconsistent, snapshot.
    pub(crate) fn from_parts(
        board: Board,
        current_player: Player,
        winner: Option<Player>,
        is_draw: bool,
    ) -> Self {
        Self {
            board,
            current_player,
            winner,
            is_draw,
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_leaves_snapshot_untouched() {
        let start = GameState::new(Player::X);
        let next = start.make_move(4, Player::X).unwrap();

        assert_eq!(start, GameState::new(Player::X));
        assert_eq!(next.board().get(4), Some(super::super::Square::Occupied(Player::X)));
        assert_eq!(next.current_player(), Player::O);
    }

    #[test]
    fn test_phase_tracks_outcome() {
        let won = GameState::replay(
            Player::X,
            &[
                Move::new(Player::X, 0),
                Move::new(Player::O, 3),
                Move::new(Player::X, 1),
                Move::new(Player::O, 4),
                Move::new(Player::X, 2),
            ],
        )
        .unwrap();
        assert_eq!(won.phase(), Phase::Won(Player::X));
        assert!(won.phase().is_terminal());
        assert_eq!(won.status(), "X wins");
    }

    #[test]
    fn test_game_over_takes_precedence_over_occupied() {
        let won = GameState::replay(
            Player::X,
            &[
                Move::new(Player::X, 0),
                Move::new(Player::O, 3),
                Move::new(Player::X, 1),
                Move::new(Player::O, 4),
                Move::new(Player::X, 2),
            ],
        )
        .unwrap();
        assert_eq!(won.make_move(0, Player::O), Err(MoveError::GameOver));
        assert_eq!(won.make_move(42, Player::O), Err(MoveError::GameOver));
    }

    #[test]
    fn test_occupied_reported_before_wrong_turn() {
        let state = GameState::new(Player::X).make_move(0, Player::X).unwrap();
        assert_eq!(state.make_move(0, Player::X), Err(MoveError::CellOccupied(0)));
        assert_eq!(state.make_move(0, Player::O), Err(MoveError::CellOccupied(0)));
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let result = GameState::replay(
            Player::X,
            &[Move::new(Player::X, 0), Move::new(Player::X, 1)],
        );
        assert_eq!(
            result,
            Err(MoveError::WrongTurn {
                expected: Player::O,
                got: Player::X
            })
        );
    }
}
