//! Serializable view of a game for front ends.

use super::action::Move;
use super::game::{Game, GameStatus};
use super::{Player, Square};
use serde::{Deserialize, Serialize};

/// Point-in-time observation of a [`Game`].
///
/// Everything a renderer needs after a move: marks, whose turn it is,
/// the status (with the winning line), and the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Squares in row-major order; `None` for empty.
    pub cells: [Option<Player>; 9],
    /// Player to move (or the winner, once won).
    pub current_player: Player,
    /// Number of marks placed.
    pub move_count: usize,
    /// Game status.
    pub status: GameStatus,
    /// Status line, as shown to players.
    pub message: String,
    /// Moves in the order they were played.
    pub history: Vec<Move>,
}

impl From<&Game> for Snapshot {
    fn from(game: &Game) -> Self {
        Self {
            cells: game.board().squares().map(Square::player),
            current_player: game.current_player(),
            move_count: game.move_count(),
            status: game.status(),
            message: game.status_message(),
            history: game.history().to_vec(),
        }
    }
}
