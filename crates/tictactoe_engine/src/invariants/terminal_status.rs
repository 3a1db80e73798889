//! Terminal status invariant: the status agrees with the board.

use super::super::{rules, Game, GameStatus};
use super::Invariant;

/// Invariant: `Won` iff a line is complete (and it is the reported line),
/// `Draw` iff the board is full with no complete line.
pub struct TerminalStatusInvariant;

impl Invariant<Game> for TerminalStatusInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        match (game.status(), rules::check_winner(board)) {
            (GameStatus::Won { winner, line }, Some(found)) => found == (winner, line),
            (GameStatus::Draw, None) => rules::is_full(board),
            (GameStatus::InProgress, None) => !rules::is_full(board),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board"
    }
}
