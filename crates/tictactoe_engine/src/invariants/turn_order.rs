//! Turn order invariant: the player behind on marks moves next.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: when mark counts differ, `current_player` is the player with
/// fewer marks.
///
/// Equal counts say nothing, since either player may have started.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        match x.cmp(&o) {
            std::cmp::Ordering::Equal => true,
            std::cmp::Ordering::Greater => game.current_player() == Player::O,
            std::cmp::Ordering::Less => game.current_player() == Player::X,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_after_single_move_holds() {
        let game = GameState::new(Player::X).make_move(4, Player::X).unwrap();
        assert!(TurnOrderInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_same_player_again_violates() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X);
        let game = GameState::from_parts(board, Player::X, None, false);
        assert!(!TurnOrderInvariant::holds(&game));
    }
}
