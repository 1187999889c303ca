//! Balanced marks invariant: mark counts differ by at most one.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X and O counts never differ by more than one.
///
/// Follows from strict alternation, whichever player starts.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x.abs_diff(o) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_alternating_play_holds() {
        let game = GameState::new(Player::O)
            .make_move(0, Player::O)
            .and_then(|g| g.make_move(1, Player::X))
            .and_then(|g| g.make_move(2, Player::O))
            .unwrap();
        assert!(BalancedMarksInvariant::holds(&game));
    }

    #[test]
    fn test_double_move_violates() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::O);
        board.place(Position::Center, Player::O);
        let game = GameState::from_parts(board, Player::X, None, false);
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}
