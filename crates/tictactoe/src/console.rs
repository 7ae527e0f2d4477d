//! Interactive play over a line-oriented reader and writer.

use crate::input::{ConsoleCommand, HELP};
use crate::render;
use std::io::{self, BufRead, Write};
use tictactoe_core::{GameSession, MoveStatus};
use tracing::{debug, info, instrument};

/// Whether to keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Drives a [`GameSession`] from text input.
///
/// After every command the console re-reads the session's snapshot and
/// scores rather than tracking state of its own.
pub struct Console<R, W> {
    session: GameSession,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `session`.
    pub fn new(session: GameSession, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads and applies commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Tic-tac-toe. Type `help` for commands.")?;
        self.show_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match line.parse::<ConsoleCommand>() {
                Ok(command) => {
                    if self.apply(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "{e}. Type `help` for commands.")?,
            }
        }

        writeln!(self.output, "Final score: {}", render::scores(&self.session))?;
        info!(scores = ?self.session.score_card(), "Console closed");
        Ok(())
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: ConsoleCommand) -> io::Result<Flow> {
        match command {
            ConsoleCommand::Move { row, col } => {
                let report = self.session.submit_move(row, col);
                if report.status == MoveStatus::Illegal {
                    writeln!(self.output, "{}", render::report(&report))?;
                    return Ok(Flow::Continue);
                }
                if report.status != MoveStatus::Ongoing {
                    writeln!(self.output, "{}", render::report(&report))?;
                    writeln!(self.output, "{}", render::scores(&self.session))?;
                }
                self.show_board()?;
            }
            ConsoleCommand::NewRound => {
                self.session.start_new_round();
                self.show_board()?;
            }
            ConsoleCommand::NewMatch => {
                self.session.new_match();
                writeln!(self.output, "New match.")?;
                self.show_board()?;
            }
            ConsoleCommand::Rename { slot, name } => {
                self.session.rename_player(slot, &name);
                writeln!(
                    self.output,
                    "Player {} is now {}.",
                    slot.number(),
                    self.session.player(slot).name()
                )?;
            }
            ConsoleCommand::Scores => {
                writeln!(self.output, "{}", render::scores(&self.session))?;
            }
            ConsoleCommand::Board => self.show_board()?,
            ConsoleCommand::Help => writeln!(self.output, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", render::board(&self.session.board_snapshot()))?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", render::prompt(&self.session))
    }
}
