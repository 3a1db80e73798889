//! Pure tic-tac-toe game logic.
//!
//! The engine knows nothing about terminals, windows, or files. A front end
//! owns a [`Game`], forwards "move requested at index I" events to
//! [`Game::apply_move`], calls [`Game::reset`] to restart, and renders
//! whatever [`Game::board`], [`Game::status`] and [`Game::current_player`]
//! report afterwards.
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 1, 4, 2, 8] {
//!     game.apply_move(index);
//! }
//! assert!(matches!(game.status(), GameStatus::Won { winner: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod line;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use action::{IgnoredReason, Move, MoveOutcome};
pub use game::{Game, GameStatus};
pub use line::Line;
pub use position::Position;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
