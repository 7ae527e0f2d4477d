//! tictactoe - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe::{Cli, Command, Config, Console, logging, replay};
use tictactoe_core::GameSession;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?.with_names(cli.first, cli.second);
    logging::init(config.log_filter());

    let mut session = GameSession::new(config.players().first(), config.players().second());
    info!(?config, "Starting tictactoe");

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            let mut console = Console::new(session, stdin.lock(), io::stdout());
            console.run().context("Console I/O failed")?;
        }
        Command::Replay { moves } => {
            let steps = replay::replay(&mut session, &moves)?;
            replay::write_json(io::stdout().lock(), &steps, &session.score_card())?;
        }
    }

    Ok(())
}
