//! Scripted games from the command line.

use tictactoe_engine::Game;
use tracing::{info, instrument};

/// Plays `indices` on a fresh game and renders the final position.
///
/// Text output is the board followed by the status line; JSON output is the
/// game's [`Snapshot`](tictactoe_engine::Snapshot).
#[instrument]
pub fn render(indices: &[usize], json: bool) -> Result<String, serde_json::Error> {
    let game = Game::replay(indices);
    info!(
        requested = indices.len(),
        placed = game.move_count(),
        status = ?game.status(),
        "Replay finished"
    );

    if json {
        serde_json::to_string_pretty(&game.snapshot())
    } else {
        Ok(format!("{}\n\n{}", game.board().display(), game.status_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let out = render(&[0, 1, 4, 2, 8], false).unwrap();
        assert_eq!(out, "X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X\n\nPlayer X Wins!");
    }

    #[test]
    fn test_json_output() {
        let out = render(&[4], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["move_count"], 1);
        assert_eq!(value["current_player"], "O");
        assert_eq!(value["cells"][4], "X");
        assert_eq!(value["status"], "InProgress");
    }
}
