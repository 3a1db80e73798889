//! Two-player tic-tac-toe in the terminal.
//!
//! Game rules live in [`tictactoe_engine`]; this crate adds the front ends
//! that drive it and the configuration and logging around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for logging and mark colours
//! - **TUI**: keyboard-driven ratatui interface holding one game
//! - **Replay**: scripted games for the command line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{Config, ConfigError, MarkColor, Theme};
pub use tictactoe_engine as engine;
