//! tictactoe - two-player tic-tac-toe CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{Config, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Config::locate(cli.config.as_deref());
    let config = Config::load(config_path.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(&config)?;
            logging::log_config_source(config_path.as_deref());
            tui::run(&config)
        }
        Command::Replay { indices, json } => {
            logging::init_stderr(&config);
            logging::log_config_source(config_path.as_deref());
            info!(moves = indices.len(), json, "Replaying game");
            let output = replay::render(&indices, json).context("Failed to encode game")?;
            println!("{}", output);
            Ok(())
        }
    }
}

