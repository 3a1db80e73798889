//! Turn-state machine for tic-tac-toe.
//!
//! A [`Game`] is an owned value: front ends hold one, feed it move requests
//! through [`Game::apply_move`], and read the board and status back out.
//! `InProgress` is the only state that accepts moves; `Won` and `Draw` are
//! left only through [`Game::reset`].

use super::action::{IgnoredReason, Move, MoveOutcome};
use super::invariants::{GameInvariants, InvariantSet};
use super::snapshot::Snapshot;
use super::{rules, Board, Line, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The player who completed the line.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Plays the given cell indices in order on a fresh game.
    ///
    /// Requests the game would ignore are skipped, exactly as an
    /// interactive front end would see them skipped.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in indices {
            game.apply_move(index);
        }
        game
    }

    /// Requests a move for the current player at `index` (0-8).
    ///
    /// Returns [`MoveOutcome::Ignored`] without touching any state when the
    /// game is over, the index is off the board, or the square is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.status.is_terminal() {
            debug!("Move after game end ignored");
            return MoveOutcome::Ignored(IgnoredReason::GameOver);
        }

        let Some(position) = Position::from_index(index) else {
            debug!("Index off the board ignored");
            return MoveOutcome::Ignored(IgnoredReason::OutOfBounds(index));
        };

        if !self.board.is_empty(position) {
            debug!(%position, "Occupied square ignored");
            return MoveOutcome::Ignored(IgnoredReason::SquareOccupied(position));
        }

        let action = Move::new(self.current_player, position);
        self.board.set(position, Square::Occupied(action.player));
        self.history.push(action);

        self.status = if let Some((winner, line)) = rules::check_winner(&self.board) {
            info!(%winner, line = ?line.indices(), "Game won");
            GameStatus::Won { winner, line }
        } else if rules::is_full(&self.board) {
            info!("Game drawn");
            GameStatus::Draw
        } else {
            self.current_player = self.current_player.opponent();
            GameStatus::InProgress
        };

        self.debug_check_invariants();

        MoveOutcome::Placed {
            action,
            status: self.status,
        }
    }

    /// Returns the game to its initial state: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is, or the winner once won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of marks placed.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the completed line if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Returns the positions still open for play; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Human-readable status line for front ends.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s Turn", self.current_player),
            GameStatus::Won { winner, .. } => format!("Player {} Wins!", winner),
            GameStatus::Draw => "It's a Draw!".to_string(),
        }
    }

    /// Captures a serializable view of the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        let result = GameInvariants::check_all(self);
        if let Err(violations) = &result {
            for violation in violations {
                warn!(description = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(result.is_ok(), "Game invariants violated");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
