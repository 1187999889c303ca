//! Consistent outcome invariant: winner and draw flags agree with the board.

use super::super::GameState;
use super::super::rules::{check_winner, is_full};
use super::Invariant;

/// Invariant: `winner` is exactly the line owner on the board, and `is_draw`
/// holds iff the board is full with no line.
///
/// Together these rule out a game that is both won and drawn.
pub struct ConsistentOutcomeInvariant;

impl Invariant<GameState> for ConsistentOutcomeInvariant {
    fn holds(game: &GameState) -> bool {
        let line = check_winner(game.board());
        let drawn = line.is_none() && is_full(game.board());
        game.winner() == line && game.is_draw() == drawn
    }

    fn description() -> &'static str {
        "Winner and draw flags match the board"
    }
}
