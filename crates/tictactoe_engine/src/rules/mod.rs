//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe rules.
//! Rules are separated from board storage so the state machine and the
//! invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
