//! Move count invariant: occupied squares match the move history.

use super::super::Game;
use super::Invariant;

/// Invariant: exactly `move_count` squares are occupied, and each recorded
/// move's square holds that move's player.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        game.board().occupied() == game.move_count()
            && game
                .history()
                .iter()
                .all(|m| game.board().square(m.position).player() == Some(m.player))
    }

    fn description() -> &'static str {
        "Occupied squares match move history"
    }
}
