//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans [`Line::ALL`] in order and returns the player and line of the
/// first line whose three squares are occupied by the same player.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.square(a) {
            Square::Occupied(player)
                if board.square(b) == Square::Occupied(player)
                    && board.square(c) == Square::Occupied(player) =>
            {
                Some((player, line))
            }
            _ => None,
        }
    })
}
