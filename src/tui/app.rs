//! Application state and key handling.

use super::input;
use crossterm::event::KeyCode;
use tictactoe_engine::{Game, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state: the game plus what the player is pointing at.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            notice: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback about the last ignored request, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Flow::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.request(self.cursor.to_index()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            other => {
                if let Some(index) = input::digit_to_index(other) {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.request(index);
                }
            }
        }
        Flow::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.notice = None;
    }

    fn request(&mut self, index: usize) {
        match self.game.apply_move(index) {
            MoveOutcome::Placed { action, .. } => {
                debug!(%action, "Move applied");
                self.notice = None;
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                self.notice = Some(reason.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
